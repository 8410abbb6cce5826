// Character classification and simple case mapping

// ---------------------------------------------------------------------------
// Phonetic classes
// ---------------------------------------------------------------------------

/// Vowels recognized when checking the context before a suffix (lowercase).
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Phonetic class of the character that precedes a matched suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Vowel,
    /// Anything that is not one of `a e i o u`, including digits and
    /// punctuation.
    Consonant,
}

/// Classify a character as vowel or consonant (case-insensitive).
///
/// Only `a e i o u` count as vowels. `y` is treated as a consonant, as are
/// non-letters, so the classification is total.
pub fn classify(c: char) -> CharClass {
    if is_vowel(c) {
        CharClass::Vowel
    } else {
        CharClass::Consonant
    }
}

/// Check whether a character is one of `a e i o u` (case-insensitive).
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&simple_lower(c))
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// The standard library's to_lowercase / to_uppercase produce iterators
// because some characters map to several characters. Suffix matching
// compares reversed text position by position, so only the first character
// of the mapping is kept and lengths never change.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c != simple_lower(c)
}

/// Upper-case the first character of `s`, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.push(simple_upper(first));
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Lower-case and reverse a word, one character out for every character in.
pub fn reversed_lower(s: &str) -> Vec<char> {
    s.chars().rev().map(simple_lower).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Vowel / consonant --

    #[test]
    fn vowels() {
        for c in ['a', 'e', 'i', 'o', 'u', 'A', 'E', 'I', 'O', 'U'] {
            assert!(is_vowel(c), "{c} should be a vowel");
            assert_eq!(classify(c), CharClass::Vowel);
        }
    }

    #[test]
    fn y_is_a_consonant() {
        assert!(!is_vowel('y'));
        assert_eq!(classify('Y'), CharClass::Consonant);
    }

    #[test]
    fn non_letters_are_consonants() {
        assert_eq!(classify('1'), CharClass::Consonant);
        assert_eq!(classify('-'), CharClass::Consonant);
        assert_eq!(classify(' '), CharClass::Consonant);
    }

    #[test]
    fn accented_vowels_are_not_vowels() {
        // Only the five plain vowels count.
        assert_eq!(classify('\u{00E9}'), CharClass::Consonant); // é
    }

    // -- Case functions --

    #[test]
    fn simple_case_mapping() {
        assert_eq!(simple_lower('A'), 'a');
        assert_eq!(simple_upper('z'), 'Z');
        assert_eq!(simple_lower('\u{00C4}'), '\u{00E4}'); // Ä -> ä
        assert_eq!(simple_upper('1'), '1');
    }

    #[test]
    fn simple_lower_keeps_one_char() {
        // U+0130 lowercases to two characters; only the first is kept.
        assert_eq!(simple_lower('\u{0130}'), 'i');
    }

    #[test]
    fn upper_query() {
        assert!(is_upper('M'));
        assert!(is_upper('\u{00C4}'));
        assert!(!is_upper('m'));
        assert!(!is_upper('7'));
        assert!(!is_upper('-'));
    }

    #[test]
    fn capitalize() {
        assert_eq!(capitalize_first("ouse"), "Ouse");
        assert_eq!(capitalize_first("Man"), "Man");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("\u{00E4}iti"), "\u{00C4}iti");
    }

    #[test]
    fn reversed_lower_form() {
        assert_eq!(reversed_lower("Mice"), vec!['e', 'c', 'i', 'm']);
        assert!(reversed_lower("").is_empty());
        assert_eq!(reversed_lower("\u{0130}x").len(), 2);
    }
}
