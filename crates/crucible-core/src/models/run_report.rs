use serde::{Deserialize, Serialize};

use crate::case::{Case, Category};

/// Outcome of one category's pass through the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResult {
    pub category: Category,
    /// Cases asked of the provider.
    pub requested: usize,
    /// Cases surviving schema validation and id assignment.
    pub accepted: usize,
    /// Records dropped by schema validation.
    pub rejected: usize,
    /// Non-fatal failure that zeroed this category, when one occurred.
    pub failure: Option<String>,
}

/// Outcome of a whole evolution run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Correlation id threaded through tracing spans.
    pub run_id: String,
    pub dry_run: bool,
    pub categories: Vec<CategoryResult>,
    /// Cases merged into the corpus. Zero on a dry run, and legitimately
    /// zero when every category failed independently.
    pub merged: usize,
    /// The full accepted batch, surfaced for inspection on dry runs.
    pub cases: Vec<Case>,
}

impl RunReport {
    pub fn total_accepted(&self) -> usize {
        self.categories.iter().map(|c| c.accepted).sum()
    }
}
