// Words that are the same in singular and plural

use std::sync::LazyLock;

use inflect_core::ExclusionSet;

/// Invariant words, stored reversed like the suffixes in the rule tables.
pub const UNINFLECTED_REVERSED: &[&str] = &[
    "atad",     // data
    "reed",     // deer
    "kcabdeef", // feedback
    "hsif",     // fish
    "ofni",     // info
    "esoom",    // moose
    "seires",   // series
    "peehs",    // sheep
    "seiceps",  // species
];

/// The English exclusion set, built on first use.
pub static UNINFLECTED: LazyLock<ExclusionSet> =
    LazyLock::new(|| ExclusionSet::from_reversed(UNINFLECTED_REVERSED.iter().copied()));
