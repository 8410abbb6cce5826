// Rebuild inflected words with the casing of the input

use inflect_core::character::capitalize_first;
use inflect_core::{Inflection, Replacement, WordView};

/// Replace the last `suffix_len` characters of `word` with each suffix of
/// `replacement`.
///
/// The kept prefix is copied verbatim. If the first replaced character was
/// upper case ("MEN" -> "M" + "AN"), the first character of every
/// replacement suffix is upper-cased too; the rest of the suffix is used as
/// written in the table.
pub fn apply<W: WordView>(word: &W, suffix_len: usize, replacement: &Replacement) -> Inflection<W> {
    let keep = word.char_len().saturating_sub(suffix_len);
    let prefix = word.slice(0, keep);
    let first_upper = suffix_len > 0 && word.is_upper_at_reversed(suffix_len - 1);

    let build = |suffix: &str| {
        let mut text = String::with_capacity(prefix.len() + suffix.len());
        text.push_str(prefix);
        if first_upper {
            text.push_str(&capitalize_first(suffix));
        } else {
            text.push_str(suffix);
        }
        word.derive(text)
    };

    match replacement {
        Replacement::Single(suffix) => Inflection::Single(build(suffix)),
        Replacement::Multiple(suffixes) => {
            Inflection::Multiple(suffixes.iter().map(|s| build(s)).collect())
        }
    }
}
