use serde::{Deserialize, Serialize};

use crate::case::Category;

/// Coverage of one fixed category: how many cases exist and how far short
/// of target they fall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCoverage {
    pub category: Category,
    pub count: usize,
    /// `max(0, target - count)`.
    pub gap: usize,
}

/// Output of the gap analyzer. Total over the fixed enumeration: every
/// fixed category appears exactly once in `coverage`, even at count 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapReport {
    /// One entry per fixed category, in enumeration order.
    pub coverage: Vec<CategoryCoverage>,
    /// Categories with `gap > 0`, descending by gap, ties broken by
    /// enumeration order.
    pub deficits: Vec<CategoryCoverage>,
}

impl GapReport {
    /// The top `n` deficit categories.
    pub fn top_deficits(&self, n: usize) -> impl Iterator<Item = &CategoryCoverage> {
        self.deficits.iter().take(n)
    }
}
