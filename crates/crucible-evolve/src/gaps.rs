//! Gap analysis: shortfall between per-category case counts and target.
//!
//! Pure and total over the fixed enumeration: every fixed category
//! appears in the output even at count 0; unknown categories are invisible
//! here by design.

use std::cmp::Reverse;

use crucible_core::case::Category;
use crucible_core::models::{CategoryCoverage, GapReport};
use crucible_core::Corpus;

/// Compute coverage and deficits for all fixed categories.
pub fn analyze(corpus: &Corpus, target: usize) -> GapReport {
    let coverage: Vec<CategoryCoverage> = Category::FIXED
        .iter()
        .map(|category| {
            let count = corpus.count_of(category);
            CategoryCoverage {
                category: category.clone(),
                count,
                gap: target.saturating_sub(count),
            }
        })
        .collect();

    // Stable sort: ties keep enumeration order.
    let mut deficits: Vec<CategoryCoverage> =
        coverage.iter().filter(|c| c.gap > 0).cloned().collect();
    deficits.sort_by_key(|c| Reverse(c.gap));

    GapReport { coverage, deficits }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crucible_core::case::{Case, Difficulty, Provenance};

    fn push_cases(corpus: &mut Corpus, category: Category, n: usize) {
        for i in 0..n {
            corpus.cases.push(Case {
                id: format!("t-{}-{i}", category.id_fragment()),
                category: category.clone(),
                question: "q".to_string(),
                output: "o".to_string(),
                ground_truth: true,
                expected_flags: vec![],
                notes: String::new(),
                difficulty: Difficulty::Easy,
                injected_false_claim: None,
                correct_fact: None,
                propagation_risk: None,
                provenance: Provenance::default(),
            });
        }
    }

    #[test]
    fn every_fixed_category_appears_even_when_empty() {
        let report = analyze(&Corpus::empty("2026-08-06"), 20);
        assert_eq!(report.coverage.len(), Category::FIXED.len());
        assert!(report.coverage.iter().all(|c| c.count == 0 && c.gap == 20));
        assert_eq!(report.deficits.len(), Category::FIXED.len());
    }

    #[test]
    fn gap_is_exactly_target_minus_count_floored_at_zero() {
        let mut corpus = Corpus::empty("2026-08-06");
        push_cases(&mut corpus, Category::VerifiedTrue, 25);
        push_cases(&mut corpus, Category::Hallucination, 5);

        let report = analyze(&corpus, 20);
        let by_cat = |cat: &Category| {
            report
                .coverage
                .iter()
                .find(|c| &c.category == cat)
                .unwrap()
        };
        assert_eq!(by_cat(&Category::VerifiedTrue).gap, 0);
        assert_eq!(by_cat(&Category::Hallucination).gap, 15);
    }

    #[test]
    fn saturated_category_is_not_a_deficit() {
        let mut corpus = Corpus::empty("2026-08-06");
        push_cases(&mut corpus, Category::VerifiedTrue, 20);
        push_cases(&mut corpus, Category::Hallucination, 5);

        let report = analyze(&corpus, 20);
        assert!(report
            .deficits
            .iter()
            .all(|c| c.category != Category::VerifiedTrue));
        assert_eq!(report.deficits[0].category, Category::Hallucination);
        assert_eq!(report.deficits[0].gap, 15);
    }

    #[test]
    fn ties_break_in_enumeration_order() {
        let report = analyze(&Corpus::empty("2026-08-06"), 10);
        let order: Vec<Category> = report.deficits.iter().map(|c| c.category.clone()).collect();
        assert_eq!(order, Category::FIXED.to_vec());
    }

    #[test]
    fn unknown_categories_are_never_counted() {
        let mut corpus = Corpus::empty("2026-08-06");
        push_cases(&mut corpus, Category::Other("prompt-leak".to_string()), 7);

        let report = analyze(&corpus, 20);
        assert_eq!(report.coverage.len(), Category::FIXED.len());
        assert!(report.coverage.iter().all(|c| c.count == 0));
    }
}
