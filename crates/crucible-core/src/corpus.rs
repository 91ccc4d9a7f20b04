//! The persisted corpus document: an ordered case sequence plus metadata.
//!
//! The engine treats the whole document as the unit of transactional
//! update: read once at the start of a run, written once at the end.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::case::{Case, Category};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Corpus {
    pub cases: Vec<Case>,
    /// ISO date of the last write.
    pub updated: String,
    /// Cumulative count of engine-generated cases ever merged.
    #[serde(default)]
    pub evolved_count: u64,
}

impl Corpus {
    /// A fresh, empty corpus stamped with the given date.
    pub fn empty(date: &str) -> Self {
        Self {
            cases: Vec::new(),
            updated: date.to_string(),
            evolved_count: 0,
        }
    }

    /// Every identifier currently present, across all categories.
    pub fn existing_ids(&self) -> HashSet<String> {
        self.cases.iter().map(|c| c.id.clone()).collect()
    }

    /// Number of cases in the given category.
    pub fn count_of(&self, category: &Category) -> usize {
        self.cases.iter().filter(|c| &c.category == category).count()
    }

    /// The `limit` most-recently-appended cases of a category, newest last.
    pub fn recent_of(&self, category: &Category, limit: usize) -> Vec<&Case> {
        let mut recent: Vec<&Case> = self
            .cases
            .iter()
            .rev()
            .filter(|c| &c.category == category)
            .take(limit)
            .collect();
        recent.reverse();
        recent
    }

    /// Append accepted cases and update bookkeeping. The caller persists
    /// the result in a single write.
    pub fn merge(&mut self, accepted: Vec<Case>, date: &str) {
        self.evolved_count += accepted.len() as u64;
        self.cases.extend(accepted);
        self.updated = date.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::{Difficulty, Provenance};

    fn case(id: &str, category: Category) -> Case {
        Case {
            id: id.to_string(),
            category,
            question: "q".to_string(),
            output: "o".to_string(),
            ground_truth: false,
            expected_flags: vec![],
            notes: String::new(),
            difficulty: Difficulty::Medium,
            injected_false_claim: None,
            correct_fact: None,
            propagation_risk: None,
            provenance: Provenance::default(),
        }
    }

    #[test]
    fn recent_of_returns_newest_last_and_bounds_at_limit() {
        let mut corpus = Corpus::empty("2026-08-06");
        for i in 1..=5 {
            corpus
                .cases
                .push(case(&format!("evo-hal-{i:03}"), Category::Hallucination));
        }
        corpus.cases.push(case("evo-adv-001", Category::Adversarial));

        let recent = corpus.recent_of(&Category::Hallucination, 3);
        let ids: Vec<&str> = recent.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["evo-hal-003", "evo-hal-004", "evo-hal-005"]);
    }

    #[test]
    fn merge_updates_count_and_date() {
        let mut corpus = Corpus::empty("2026-01-01");
        corpus.merge(vec![case("evo-edg-001", Category::EdgeCase)], "2026-08-06");
        assert_eq!(corpus.cases.len(), 1);
        assert_eq!(corpus.evolved_count, 1);
        assert_eq!(corpus.updated, "2026-08-06");
    }

    #[test]
    fn empty_merge_touches_date_only() {
        let mut corpus = Corpus::empty("2026-01-01");
        corpus.merge(vec![], "2026-08-06");
        assert_eq!(corpus.cases.len(), 0);
        assert_eq!(corpus.evolved_count, 0);
        assert_eq!(corpus.updated, "2026-08-06");
    }
}
