// Singular -> plural suffix table

use inflect_core::Replacement::{Multiple, Single};
use inflect_core::SuffixRule;

/// Rules applied by `pluralize`, highest priority first.
///
/// Same columns as the plural table. Words matching none of these get a
/// plain "s" appended by the engine.
pub const SINGULAR_TO_PLURAL: &[SuffixRule] = &[
    // criterion
    SuffixRule::new("airetirc", 8, false, false, Single("criterion")),
    // nebula
    SuffixRule::new("aluben", 6, false, false, Single("nebulae")),
    // child
    SuffixRule::new("dlihc", 5, true, true, Single("children")),
    // price
    SuffixRule::new("eci", 3, false, true, Single("ices")),
    // service
    SuffixRule::new("ecivres", 7, true, true, Single("services")),
    // life, wife
    SuffixRule::new("efi", 3, false, true, Single("ives")),
    // selfie
    SuffixRule::new("eifles", 6, true, true, Single("selfies")),
    // movie
    SuffixRule::new("eivom", 5, true, true, Single("movies")),
    // louse
    SuffixRule::new("esuol", 5, false, true, Single("lice")),
    // mouse
    SuffixRule::new("esuom", 5, false, true, Single("mice")),
    // goose
    SuffixRule::new("esoo", 4, false, true, Single("eese")),
    // house, base
    SuffixRule::new("es", 2, true, true, Single("ses")),
    // goose
    SuffixRule::new("esoog", 5, true, true, Single("geese")),
    // cave
    SuffixRule::new("ev", 2, true, true, Single("ves")),
    // drive
    SuffixRule::new("evird", 5, false, true, Single("drives")),
    // objective, alternative
    SuffixRule::new("evit", 4, true, true, Single("tives")),
    // move
    SuffixRule::new("evom", 4, true, true, Single("moves")),
    // staff
    SuffixRule::new("ffats", 5, true, true, Single("staves")),
    // cliff, cuff
    SuffixRule::new("ff", 2, true, true, Single("ffs")),
    // roof, leaf, elf
    SuffixRule::new("f", 1, true, true, Multiple(&["fs", "ves"])),
    // arch
    SuffixRule::new("hc", 2, true, true, Single("ches")),
    // bush
    SuffixRule::new("hs", 2, true, true, Single("shes")),
    // tooth
    SuffixRule::new("htoot", 5, true, true, Single("teeth")),
    // bacterium
    SuffixRule::new("mu", 2, true, true, Single("a")),
    // man, woman
    SuffixRule::new("nam", 3, true, true, Single("men")),
    // person
    SuffixRule::new("nosrep", 6, true, true, Multiple(&["persons", "people"])),
    // action, nation
    SuffixRule::new("noi", 3, true, true, Single("ions")),
    // season, lesson, poison
    SuffixRule::new("nos", 3, true, true, Single("sons")),
    // phenomenon
    SuffixRule::new("no", 2, true, true, Single("a")),
    // echo
    SuffixRule::new("ohce", 4, true, true, Single("echoes")),
    // hero
    SuffixRule::new("oreh", 4, true, true, Single("heroes")),
    // atlas
    SuffixRule::new("salta", 5, true, true, Single("atlases")),
    // iris
    SuffixRule::new("siri", 4, true, true, Single("irises")),
    // analysis, thesis, crisis
    SuffixRule::new("sis", 3, true, true, Single("ses")),
    // access, address, kiss
    SuffixRule::new("ss", 2, true, false, Single("sses")),
    // syllabus
    SuffixRule::new("suballys", 8, true, true, Single("syllabi")),
    // bus
    SuffixRule::new("sub", 3, true, true, Single("buses")),
    // circus
    SuffixRule::new("suc", 3, true, true, Single("cuses")),
    // fungus, alumnus, radius
    SuffixRule::new("su", 2, true, true, Single("i")),
    // news
    SuffixRule::new("swen", 4, true, true, Single("news")),
    // foot
    SuffixRule::new("toof", 4, true, true, Single("feet")),
    // chateau, bureau
    SuffixRule::new("uae", 3, false, true, Multiple(&["eaus", "eaux"])),
    // ox, as a whole word only
    SuffixRule::new("xo", 2, false, false, Single("oxen")),
    // hoax
    SuffixRule::new("xaoh", 4, true, false, Single("hoaxes")),
    // index
    SuffixRule::new("xedni", 5, false, true, Multiple(&["indicies", "indexes"])),
    // box, fox
    SuffixRule::new("xo", 2, false, true, Single("oxes")),
    // matrix
    SuffixRule::new("x", 1, true, false, Multiple(&["cies", "xes"])),
    // appendix
    SuffixRule::new("xi", 2, false, true, Single("ices")),
    // baby
    SuffixRule::new("y", 1, false, true, Single("ies")),
    // quiz
    SuffixRule::new("ziuq", 4, true, false, Single("quizzes")),
    // waltz
    SuffixRule::new("z", 1, true, true, Single("zes")),
];
