//! Heuristic English singular/plural conversion.
//!
//! Inflection is a first-fit search over an ordered table of suffix rules,
//! with no dictionary behind it. Results are best guesses, and when a suffix
//! is genuinely ambiguous every candidate is returned:
//!
//! ```
//! use inflect_en::{Inflection, pluralize, singularize};
//!
//! assert_eq!(pluralize("child"), Inflection::Single("children".to_string()));
//! assert_eq!(singularize("Mice"), Inflection::Single("Mouse".to_string()));
//! assert_eq!(
//!     singularize("leaves").into_vec(),
//!     ["leaf", "leave", "leaff"],
//! );
//! ```
//!
//! # Architecture
//!
//! - [`rules`] -- the two English rule tables and the uninflected word set
//! - [`matcher`] -- anchored first-fit suffix matching with context checks
//! - [`case_adapter`] -- rebuilds candidates with the input's casing
//! - [`engine`] -- [`InflectionEngine`], tying the above together

pub mod case_adapter;
pub mod engine;
pub mod matcher;
pub mod rules;

pub use engine::InflectionEngine;
pub use inflect_core::{Inflection, Word, WordView};

/// Trait for singular/plural converters.
///
/// Consumers that derive names from words should depend on this rather than
/// on a concrete engine.
pub trait Inflector {
    /// Singular form(s) of `word`. Unrecognized words come back unchanged.
    fn singularize(&self, word: &str) -> Inflection<String>;

    /// Plural form(s) of `word`. Unrecognized words get an "s" appended.
    fn pluralize(&self, word: &str) -> Inflection<String>;
}

impl Inflector for InflectionEngine<'_> {
    fn singularize(&self, word: &str) -> Inflection<String> {
        self.singularize_word(&word.to_owned())
    }

    fn pluralize(&self, word: &str) -> Inflection<String> {
        self.pluralize_word(&word.to_owned())
    }
}

/// Singular form(s) of `word` using the built-in English tables.
pub fn singularize(word: &str) -> Inflection<String> {
    InflectionEngine::english().singularize(word)
}

/// Plural form(s) of `word` using the built-in English tables.
pub fn pluralize(word: &str) -> Inflection<String> {
    InflectionEngine::english().pluralize(word)
}
