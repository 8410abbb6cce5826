// Suffix substitution rules

use crate::character::CharClass;

/// What a matched suffix is replaced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Replacement {
    /// One certain replacement suffix.
    Single(&'static str),
    /// Several equally plausible suffixes, in the order they are offered.
    Multiple(&'static [&'static str]),
}

impl Replacement {
    /// The replacement suffixes in declaration order.
    pub fn suffixes(&self) -> &[&'static str] {
        match self {
            Replacement::Single(s) => std::slice::from_ref(s),
            Replacement::Multiple(list) => list,
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Replacement::Multiple(_))
    }
}

/// One entry of a rule table.
///
/// `reversed_suffix` is the suffix spelled backwards and in lower case
/// ("ies" is stored as "sei"). `suffix_len` is its length in characters.
/// `after_vowel` and `after_consonant` say which character may precede the
/// suffix; they are ignored when the suffix spans the whole word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuffixRule {
    pub reversed_suffix: &'static str,
    pub suffix_len: usize,
    pub after_vowel: bool,
    pub after_consonant: bool,
    pub replacement: Replacement,
}

/// An ordered rule table. Earlier rules win.
pub type RuleTable = [SuffixRule];

impl SuffixRule {
    pub const fn new(
        reversed_suffix: &'static str,
        suffix_len: usize,
        after_vowel: bool,
        after_consonant: bool,
        replacement: Replacement,
    ) -> Self {
        Self {
            reversed_suffix,
            suffix_len,
            after_vowel,
            after_consonant,
            replacement,
        }
    }

    /// Whether a character of class `class` may directly precede the suffix.
    pub fn allows_before(&self, class: CharClass) -> bool {
        match class {
            CharClass::Vowel => self.after_vowel,
            CharClass::Consonant => self.after_consonant,
        }
    }

    /// The suffix in normal reading order.
    pub fn suffix(&self) -> String {
        self.reversed_suffix.chars().rev().collect()
    }

    /// Whether `suffix_len` agrees with the stored suffix and the replacement
    /// offers at least one candidate.
    pub fn is_consistent(&self) -> bool {
        self.reversed_suffix.chars().count() == self.suffix_len
            && !self.replacement.suffixes().is_empty()
    }
}
