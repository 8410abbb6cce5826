// Plural -> singular suffix table

use inflect_core::Replacement::{Multiple, Single};
use inflect_core::SuffixRule;

/// Rules applied by `singularize`, highest priority first.
///
/// Columns: reversed plural suffix, its length, may follow a vowel, may
/// follow a consonant, singular suffix(es).
pub const PLURAL_TO_SINGULAR: &[SuffixRule] = &[
    // criteria, phenomena, bacteria
    SuffixRule::new("a", 1, true, true, Multiple(&["on", "um"])),
    // nebulae
    SuffixRule::new("ea", 2, true, true, Single("a")),
    // services
    SuffixRule::new("secivres", 8, true, true, Single("service")),
    // mice, lice
    SuffixRule::new("eci", 3, false, true, Single("ouse")),
    // geese
    SuffixRule::new("esee", 4, false, true, Single("oose")),
    // fungi, alumni, radii
    SuffixRule::new("i", 1, true, true, Single("us")),
    // men, women
    SuffixRule::new("nem", 3, true, true, Single("man")),
    // children
    SuffixRule::new("nerdlihc", 8, true, true, Single("child")),
    // oxen
    SuffixRule::new("nexo", 4, false, false, Single("ox")),
    // indices, appendices, prices
    SuffixRule::new("seci", 4, false, true, Multiple(&["ex", "ix", "ice"])),
    // selfies
    SuffixRule::new("seifles", 7, true, true, Single("selfie")),
    // movies
    SuffixRule::new("seivom", 6, true, true, Single("movie")),
    // feet
    SuffixRule::new("teef", 4, true, true, Single("foot")),
    // geese
    SuffixRule::new("eseeg", 5, true, true, Single("goose")),
    // teeth
    SuffixRule::new("hteet", 5, true, true, Single("tooth")),
    // news
    SuffixRule::new("swen", 4, true, true, Single("news")),
    // series
    SuffixRule::new("seires", 6, true, true, Single("series")),
    // babies
    SuffixRule::new("sei", 3, false, true, Single("y")),
    // addresses, kisses
    SuffixRule::new("sess", 4, true, false, Single("ss")),
    // analyses, theses, crises, houses, bases, atlases
    SuffixRule::new("ses", 3, true, true, Multiple(&["s", "se", "sis"])),
    // objectives, alternatives
    SuffixRule::new("sevit", 5, true, true, Single("tive")),
    // drives
    SuffixRule::new("sevird", 6, false, true, Single("drive")),
    // lives, wives
    SuffixRule::new("sevi", 4, false, true, Single("ife")),
    // moves
    SuffixRule::new("sevom", 5, true, true, Single("move")),
    // hooves, elves, caves, staves
    SuffixRule::new("sev", 3, true, true, Multiple(&["f", "ve", "ff"])),
    // axes
    SuffixRule::new("sexa", 4, false, false, Multiple(&["ax", "axe", "axis"])),
    // indexes, matrixes
    SuffixRule::new("sex", 3, true, false, Single("x")),
    // quizzes
    SuffixRule::new("sezz", 4, true, false, Single("z")),
    // bureaus
    SuffixRule::new("suae", 4, false, true, Single("eau")),
    // fees, trees, employees
    SuffixRule::new("see", 3, true, true, Single("ee")),
    // roses, garages, heroes, bushes, arches, shoes
    SuffixRule::new("se", 2, true, true, Multiple(&["", "e"])),
    // tags
    SuffixRule::new("s", 1, true, true, Single("")),
    // chateaux
    SuffixRule::new("xuae", 4, false, true, Single("eau")),
    // people
    SuffixRule::new("elpoep", 6, true, true, Single("person")),
];
