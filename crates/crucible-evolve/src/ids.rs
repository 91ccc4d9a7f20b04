//! Identifier allocation: collision-free, deterministically ordered
//! batches of `evo-<cat>-NNN` ids.
//!
//! The allocator scans every existing id sharing the category prefix
//! (across the whole corpus, not just engine-generated cases), takes one
//! past the maximum numeric suffix, and never backfills gaps.

use std::collections::HashSet;

use crucible_core::case::Category;
use crucible_core::constants::{ID_MARKER, ID_SUFFIX_WIDTH};

/// Prefix for a category's evolved ids, e.g. `evo-hal-`.
pub fn prefix(category: &Category) -> String {
    format!("{ID_MARKER}-{}-", category.id_fragment())
}

/// Allocate `count` fresh ids for a category given every id already in
/// the corpus. Suffixes are strictly increasing within the batch and
/// zero-padded to at least three digits.
pub fn allocate(category: &Category, existing: &HashSet<String>, count: usize) -> Vec<String> {
    let prefix = prefix(category);

    let max_suffix = existing
        .iter()
        .filter_map(|id| id.strip_prefix(&prefix))
        .filter_map(|suffix| suffix.parse::<u64>().ok())
        .max()
        .unwrap_or(0);

    let width = ID_SUFFIX_WIDTH;
    let mut next = max_suffix + 1;
    let mut ids = Vec::with_capacity(count);
    while ids.len() < count {
        let candidate = format!("{prefix}{next:0width$}");
        // Non-numeric or oddly padded ids can shadow a formatted candidate
        // without contributing to max_suffix; skip rather than collide.
        if !existing.contains(&candidate) {
            ids.push(candidate);
        }
        next += 1;
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn set(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn first_allocation_starts_at_one() {
        let ids = allocate(&Category::Hallucination, &HashSet::new(), 2);
        assert_eq!(ids, vec!["evo-hal-001", "evo-hal-002"]);
    }

    #[test]
    fn gaps_are_never_backfilled() {
        let existing = set(&["evo-hal-001", "evo-hal-003"]);
        let ids = allocate(&Category::Hallucination, &existing, 2);
        assert_eq!(ids, vec!["evo-hal-004", "evo-hal-005"]);
    }

    #[test]
    fn other_categories_do_not_affect_the_counter() {
        let existing = set(&["evo-adv-009", "evo-ver-002"]);
        let ids = allocate(&Category::Hallucination, &existing, 1);
        assert_eq!(ids, vec!["evo-hal-001"]);
    }

    #[test]
    fn suffix_grows_past_the_padding_width() {
        let existing = set(&["evo-edg-999"]);
        let ids = allocate(&Category::EdgeCase, &existing, 2);
        assert_eq!(ids, vec!["evo-edg-1000", "evo-edg-1001"]);
    }

    #[test]
    fn curated_ids_with_non_numeric_suffixes_are_ignored() {
        let existing = set(&["evo-hal-pilot", "man-hal-004"]);
        let ids = allocate(&Category::Hallucination, &existing, 1);
        assert_eq!(ids, vec!["evo-hal-001"]);
    }

    proptest! {
        #[test]
        fn batches_never_collide_with_existing_or_themselves(
            suffixes in proptest::collection::hash_set(1u64..500, 0..40),
            count in 1usize..20,
        ) {
            let existing: HashSet<String> = suffixes
                .iter()
                .map(|n| format!("evo-syn-{n:03}"))
                .collect();
            let ids = allocate(&Category::SynthesisBias, &existing, count);

            prop_assert_eq!(ids.len(), count);
            let unique: HashSet<&String> = ids.iter().collect();
            prop_assert_eq!(unique.len(), count);
            for id in &ids {
                prop_assert!(!existing.contains(id));
            }

            // Strictly increasing suffixes within the batch.
            let nums: Vec<u64> = ids
                .iter()
                .map(|id| id.strip_prefix("evo-syn-").unwrap().parse().unwrap())
                .collect();
            prop_assert!(nums.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
