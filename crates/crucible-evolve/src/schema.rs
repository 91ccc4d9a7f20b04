//! Schema screening of candidate records, pre-identifier-assignment.
//!
//! Per-record and independent: one invalid record never invalidates the
//! batch. Rejections are recorded reasons, not faults; surviving records
//! are never patched or defaulted on the gated fields.

use crucible_core::case::{Case, Category, Difficulty, Provenance, PropagationRisk};
use serde_json::Value;
use tracing::warn;

/// One dropped record and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Position of the record in the provider's array.
    pub index: usize,
    pub reason: String,
}

/// Result of screening one provider batch.
#[derive(Debug)]
pub struct Screened {
    pub accepted: Vec<Value>,
    pub rejected: Vec<Rejection>,
}

/// Screen a batch. Accept a record only if `category`, `question`, and
/// `output` are non-empty strings and `groundTruth` is strictly boolean.
/// `id` presence is irrelevant here; ids are reassigned later.
pub fn screen(records: Vec<Value>) -> Screened {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();

    for (index, record) in records.into_iter().enumerate() {
        match violation(&record) {
            None => accepted.push(record),
            Some(reason) => {
                warn!(index, %reason, "candidate record rejected");
                rejected.push(Rejection { index, reason });
            }
        }
    }
    Screened { accepted, rejected }
}

fn violation(record: &Value) -> Option<String> {
    for field in ["category", "question", "output"] {
        match record.get(field) {
            Some(Value::String(s)) if !s.trim().is_empty() => {}
            Some(Value::String(_)) => return Some(format!("field `{field}` is empty")),
            Some(_) => return Some(format!("field `{field}` is not a string")),
            None => return Some(format!("field `{field}` is missing")),
        }
    }
    match record.get("groundTruth") {
        Some(Value::Bool(_)) => None,
        Some(_) => Some("field `groundTruth` is not a boolean".to_string()),
        None => Some("field `groundTruth` is missing".to_string()),
    }
}

/// Build a [`Case`] from a screened record. The id is left empty for the
/// allocator; ungated fields are read leniently (absent flags/notes become
/// empty, an unparsable difficulty falls back to medium).
pub fn materialize(record: &Value) -> Case {
    let str_field = |name: &str| {
        record
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let opt_field = |name: &str| {
        record
            .get(name)
            .and_then(Value::as_str)
            .map(str::to_string)
    };

    let difficulty = record
        .get("difficulty")
        .and_then(Value::as_str)
        .and_then(|d| match d {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        })
        .unwrap_or(Difficulty::Medium);

    let propagation_risk =
        record
            .get("propagationRisk")
            .and_then(Value::as_str)
            .and_then(|r| match r {
                "low" => Some(PropagationRisk::Low),
                "medium" => Some(PropagationRisk::Medium),
                "high" => Some(PropagationRisk::High),
                "critical" => Some(PropagationRisk::Critical),
                _ => None,
            });

    let expected_flags = record
        .get("expectedFlags")
        .and_then(Value::as_array)
        .map(|flags| {
            flags
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Case {
        id: String::new(),
        category: Category::parse(&str_field("category")),
        question: str_field("question"),
        output: str_field("output"),
        // Screening guarantees a boolean is present.
        ground_truth: record
            .get("groundTruth")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        expected_flags,
        notes: str_field("notes"),
        difficulty,
        injected_false_claim: opt_field("injectedFalseClaim"),
        correct_fact: opt_field("correctFact"),
        propagation_risk,
        provenance: Provenance::default(),
    }
}
