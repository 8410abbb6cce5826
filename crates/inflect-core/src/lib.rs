//! Shared building blocks for suffix-rule based noun inflection.
//!
//! This crate holds the language-neutral pieces the engine is built from:
//!
//! - [`character`] -- vowel/consonant classification and simple case mapping
//! - [`word`] -- the [`WordView`] capability and the precomputed [`Word`] value
//! - [`exclusion`] -- sets of words that bypass inflection entirely
//! - [`rule`] -- suffix substitution rules and their replacements
//! - [`inflection`] -- the single-or-ambiguous [`Inflection`] result

pub mod character;
pub mod exclusion;
pub mod inflection;
pub mod rule;
pub mod word;

pub use exclusion::ExclusionSet;
pub use inflection::Inflection;
pub use rule::{Replacement, RuleTable, SuffixRule};
pub use word::{Word, WordError, WordView};
