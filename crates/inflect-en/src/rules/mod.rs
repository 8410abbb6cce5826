// English rule tables
//
// Table order is the tie-break: several suffixes are suffixes of one
// another ("s", "se", "ses", "sess") and the first rule whose context
// check passes is the one applied. Reordering entries changes results.

mod plural;
mod singular;
mod uninflected;

pub use plural::PLURAL_TO_SINGULAR;
pub use singular::SINGULAR_TO_PLURAL;
pub use uninflected::{UNINFLECTED, UNINFLECTED_REVERSED};

#[cfg(test)]
mod tests {
    use super::*;

    use inflect_core::SuffixRule;

    fn assert_consistent(name: &str, table: &[SuffixRule]) {
        for (i, rule) in table.iter().enumerate() {
            assert!(
                rule.is_consistent(),
                "{name}[{i}] ({:?}) has suffix_len {} or no candidates",
                rule.reversed_suffix,
                rule.suffix_len
            );
            assert_eq!(
                rule.reversed_suffix,
                rule.reversed_suffix.to_lowercase(),
                "{name}[{i}] suffix must be lower case"
            );
        }
    }

    #[test]
    fn plural_table_is_consistent() {
        assert_consistent("PLURAL_TO_SINGULAR", PLURAL_TO_SINGULAR);
        assert_eq!(PLURAL_TO_SINGULAR.len(), 34);
    }

    #[test]
    fn singular_table_is_consistent() {
        assert_consistent("SINGULAR_TO_PLURAL", SINGULAR_TO_PLURAL);
        assert_eq!(SINGULAR_TO_PLURAL.len(), 51);
    }

    #[test]
    fn catch_all_s_rule_comes_after_specific_s_rules() {
        let pos = |rev: &str| {
            PLURAL_TO_SINGULAR
                .iter()
                .position(|r| r.reversed_suffix == rev)
                .unwrap()
        };
        assert!(pos("sei") < pos("s"));
        assert!(pos("sess") < pos("ses"));
        assert!(pos("ses") < pos("se"));
        assert!(pos("se") < pos("s"));
    }

    #[test]
    fn whole_word_ox_rule_precedes_consonant_ox_rule() {
        let ox: Vec<&SuffixRule> = SINGULAR_TO_PLURAL
            .iter()
            .filter(|r| r.reversed_suffix == "xo")
            .collect();
        assert_eq!(ox.len(), 2);
        assert!(!ox[0].after_vowel && !ox[0].after_consonant);
        assert!(ox[1].after_consonant);
    }

    #[test]
    fn uninflected_words() {
        assert_eq!(UNINFLECTED.len(), UNINFLECTED_REVERSED.len());
        for w in ["data", "deer", "feedback", "fish", "info", "moose", "series", "sheep", "species"] {
            assert!(UNINFLECTED.contains(w), "{w}");
        }
        assert!(UNINFLECTED.contains("Sheep"));
        assert!(!UNINFLECTED.contains("news"));
    }
}
