// Words that bypass inflection entirely

use hashbrown::HashSet;

use crate::character::reversed_lower;

/// A set of whole words that are the same in singular and plural.
///
/// Entries are stored reversed and lower-cased, the same shape the matcher
/// sees, so membership is one hash lookup on the view the engine already
/// holds.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    reversed: HashSet<Vec<char>>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from words written normally ("sheep", "Series").
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let mut set = Self::new();
        for word in words {
            set.insert(word);
        }
        set
    }

    /// Build a set from entries that are already reversed ("peehs").
    ///
    /// Entries are lower-cased on the way in.
    pub fn from_reversed<'a>(entries: impl IntoIterator<Item = &'a str>) -> Self {
        let reversed = entries
            .into_iter()
            .map(|e| e.chars().map(crate::character::simple_lower).collect())
            .collect();
        Self { reversed }
    }

    /// Add a word written normally. Returns `false` if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        self.reversed.insert(reversed_lower(word))
    }

    /// Case-insensitive membership test for a word written normally.
    pub fn contains(&self, word: &str) -> bool {
        self.contains_reversed(&reversed_lower(word))
    }

    /// Membership test for an already reversed, lower-cased word.
    pub fn contains_reversed(&self, reversed_lower: &[char]) -> bool {
        self.reversed.contains(reversed_lower)
    }

    pub fn len(&self) -> usize {
        self.reversed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reversed.is_empty()
    }

    /// Iterate over the entries in their normal (unreversed) spelling.
    /// Order is unspecified.
    pub fn words(&self) -> impl Iterator<Item = String> + '_ {
        self.reversed.iter().map(|rev| rev.iter().rev().collect())
    }
}
