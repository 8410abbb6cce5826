// Anchored first-fit suffix matching

use inflect_core::character::classify;
use inflect_core::{ExclusionSet, RuleTable, SuffixRule, WordView};

/// A rule that matched, with the number of characters it consumed from the
/// end of the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixMatch<'t> {
    pub rule: &'t SuffixRule,
    pub suffix_len: usize,
}

/// Result of looking a word up against an exclusion set and a rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome<'t> {
    /// The whole word is in the exclusion set; return it unchanged.
    Invariant,
    /// A rule applies.
    Matched(SuffixMatch<'t>),
    /// No rule applies; the caller's fallback is used.
    NoMatch,
}

/// Check `word` against `uninflected`, then search `table` for the first
/// applicable rule.
pub fn find_match<'t, W: WordView + ?Sized>(
    word: &W,
    table: &'t RuleTable,
    uninflected: &ExclusionSet,
) -> MatchOutcome<'t> {
    let reversed = word.reversed_lower();
    if uninflected.contains_reversed(&reversed) {
        return MatchOutcome::Invariant;
    }
    match match_reversed(&reversed, table) {
        Some(m) => MatchOutcome::Matched(m),
        None => MatchOutcome::NoMatch,
    }
}

/// Search `table` in order for the first rule whose reversed suffix is a
/// prefix of `reversed` and whose context constraint accepts the character
/// that follows it (i.e. precedes the suffix in the word).
///
/// Suffixes are always anchored at the end of the word: there is no retry
/// at another offset, and a rule longer than the word never matches. When
/// the suffix spans the whole word the context check is skipped.
pub fn match_reversed<'t>(reversed: &[char], table: &'t RuleTable) -> Option<SuffixMatch<'t>> {
    table
        .iter()
        .find(|rule| rule_applies(reversed, rule))
        .map(|rule| SuffixMatch {
            rule,
            suffix_len: rule.suffix_len,
        })
}

fn rule_applies(reversed: &[char], rule: &SuffixRule) -> bool {
    if rule.suffix_len > reversed.len() {
        return false;
    }
    if !rule
        .reversed_suffix
        .chars()
        .zip(reversed)
        .all(|(expected, &actual)| expected == actual)
    {
        return false;
    }
    match reversed.get(rule.suffix_len) {
        Some(&preceding) => rule.allows_before(classify(preceding)),
        None => true,
    }
}
