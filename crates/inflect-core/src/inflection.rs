// Inflection result: one certain form, or an ordered list of guesses

use std::fmt;

/// The outcome of singularizing or pluralizing a word.
///
/// `Multiple` is produced when the matched rule offers several suffixes.
/// Its candidates follow the rule's declaration order, which is not a
/// confidence ranking. It is never empty.
///
/// With the `serde` feature the value serializes untagged: a plain string
/// for `Single`, an array for `Multiple`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum Inflection<W> {
    Single(W),
    Multiple(Vec<W>),
}

impl<W> Inflection<W> {
    /// All candidates as a slice (one element for `Single`).
    pub fn as_slice(&self) -> &[W] {
        match self {
            Inflection::Single(w) => std::slice::from_ref(w),
            Inflection::Multiple(list) => list,
        }
    }

    /// The first candidate.
    pub fn first(&self) -> Option<&W> {
        self.as_slice().first()
    }

    pub fn into_first(self) -> Option<W> {
        match self {
            Inflection::Single(w) => Some(w),
            Inflection::Multiple(list) => list.into_iter().next(),
        }
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Inflection::Multiple(_))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, W> {
        self.as_slice().iter()
    }

    pub fn into_vec(self) -> Vec<W> {
        match self {
            Inflection::Single(w) => vec![w],
            Inflection::Multiple(list) => list,
        }
    }

    /// Convert every candidate, keeping the shape.
    pub fn map<U>(self, mut f: impl FnMut(W) -> U) -> Inflection<U> {
        match self {
            Inflection::Single(w) => Inflection::Single(f(w)),
            Inflection::Multiple(list) => Inflection::Multiple(list.into_iter().map(f).collect()),
        }
    }
}

impl<W> IntoIterator for Inflection<W> {
    type Item = W;
    type IntoIter = std::vec::IntoIter<W>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, W> IntoIterator for &'a Inflection<W> {
    type Item = &'a W;
    type IntoIter = std::slice::Iter<'a, W>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Candidates separated by `|`.
impl<W: fmt::Display> fmt::Display for Inflection<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, w) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{w}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ambiguous() -> Inflection<String> {
        Inflection::Multiple(vec!["hoof".into(), "hoove".into(), "hooff".into()])
    }

    #[test]
    fn single_shape() {
        let r = Inflection::Single("men".to_string());
        assert_eq!(r.len(), 1);
        assert!(!r.is_ambiguous());
        assert_eq!(r.first().map(String::as_str), Some("men"));
        assert_eq!(r.into_vec(), vec!["men".to_string()]);
    }

    #[test]
    fn multiple_keeps_order() {
        let r = ambiguous();
        assert!(r.is_ambiguous());
        assert_eq!(r.len(), 3);
        let got: Vec<&str> = r.iter().map(String::as_str).collect();
        assert_eq!(got, ["hoof", "hoove", "hooff"]);
        assert_eq!(r.into_first().as_deref(), Some("hoof"));
    }

    #[test]
    fn map_keeps_shape() {
        let r = ambiguous().map(|w| w.len());
        assert_eq!(r, Inflection::Multiple(vec![4, 5, 5]));
        let r = Inflection::Single("ox").map(str::to_uppercase);
        assert_eq!(r, Inflection::Single("OX".to_string()));
    }

    #[test]
    fn display_joins_candidates() {
        assert_eq!(ambiguous().to_string(), "hoof|hoove|hooff");
        assert_eq!(Inflection::Single("feet").to_string(), "feet");
    }

    #[test]
    fn iterate_by_value_and_by_ref() {
        let r = ambiguous();
        let mut n = 0;
        for _ in &r {
            n += 1;
        }
        assert_eq!(n, 3);
        assert_eq!(r.into_iter().last().as_deref(), Some("hooff"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_untagged() {
        let single = serde_json::to_string(&Inflection::Single("news")).unwrap();
        assert_eq!(single, "\"news\"");
        let multi = serde_json::to_string(&ambiguous()).unwrap();
        assert_eq!(multi, "[\"hoof\",\"hoove\",\"hooff\"]");
    }
}
