// InflectionEngine: exclusion check -> suffix match -> case adapter -> fallback

use inflect_core::{ExclusionSet, Inflection, RuleTable, WordView};

use crate::case_adapter;
use crate::matcher::{MatchOutcome, find_match};
use crate::rules::{PLURAL_TO_SINGULAR, SINGULAR_TO_PLURAL, UNINFLECTED};

/// Converts words between singular and plural using two ordered rule tables
/// and a set of invariant words.
///
/// The engine only borrows its tables, so it is `Copy` and can be shared
/// freely between threads. Neither direction can fail: a word is either
/// excluded (returned unchanged), matched by a rule, or handled by the
/// fallback (unchanged when singularizing, `+ "s"` when pluralizing).
#[derive(Debug, Clone, Copy)]
pub struct InflectionEngine<'a> {
    plural_to_singular: &'a RuleTable,
    singular_to_plural: &'a RuleTable,
    uninflected: &'a ExclusionSet,
}

impl InflectionEngine<'static> {
    /// The engine over the built-in English tables.
    pub fn english() -> Self {
        Self::new(PLURAL_TO_SINGULAR, SINGULAR_TO_PLURAL, &UNINFLECTED)
    }
}

impl Default for InflectionEngine<'static> {
    fn default() -> Self {
        Self::english()
    }
}

impl<'a> InflectionEngine<'a> {
    /// Build an engine over custom tables.
    pub fn new(
        plural_to_singular: &'a RuleTable,
        singular_to_plural: &'a RuleTable,
        uninflected: &'a ExclusionSet,
    ) -> Self {
        Self {
            plural_to_singular,
            singular_to_plural,
            uninflected,
        }
    }

    /// Singular form(s) of `word`.
    ///
    /// Words no rule recognizes are assumed to be singular already and are
    /// returned unchanged.
    pub fn singularize_word<W: WordView>(&self, word: &W) -> Inflection<W> {
        match find_match(word, self.plural_to_singular, self.uninflected) {
            MatchOutcome::Invariant => {
                tracing::trace!(word = word.text(), "uninflected word");
                Inflection::Single(unchanged(word))
            }
            MatchOutcome::Matched(m) => {
                tracing::trace!(
                    word = word.text(),
                    suffix = %m.rule.suffix(),
                    suffix_len = m.suffix_len,
                    "singularize: matched rule"
                );
                case_adapter::apply(word, m.suffix_len, &m.rule.replacement)
            }
            MatchOutcome::NoMatch => {
                tracing::trace!(word = word.text(), "singularize: no rule, keeping word");
                Inflection::Single(unchanged(word))
            }
        }
    }

    /// Plural form(s) of `word`.
    ///
    /// Words no rule recognizes get a plain "s" appended.
    pub fn pluralize_word<W: WordView>(&self, word: &W) -> Inflection<W> {
        match find_match(word, self.singular_to_plural, self.uninflected) {
            MatchOutcome::Invariant => {
                tracing::trace!(word = word.text(), "uninflected word");
                Inflection::Single(unchanged(word))
            }
            MatchOutcome::Matched(m) => {
                tracing::trace!(
                    word = word.text(),
                    suffix = %m.rule.suffix(),
                    suffix_len = m.suffix_len,
                    "pluralize: matched rule"
                );
                case_adapter::apply(word, m.suffix_len, &m.rule.replacement)
            }
            MatchOutcome::NoMatch => {
                tracing::trace!(word = word.text(), "pluralize: no rule, appending s");
                Inflection::Single(word.derive(format!("{}s", word.text())))
            }
        }
    }

    /// The words this engine leaves unchanged in both directions.
    pub fn uninflected(&self) -> &'a ExclusionSet {
        self.uninflected
    }
}

fn unchanged<W: WordView>(word: &W) -> W {
    word.derive(word.text().to_owned())
}
