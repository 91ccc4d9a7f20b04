use serde::{Deserialize, Serialize};

use super::category::Category;
use super::difficulty::Difficulty;
use super::provenance::{Provenance, PropagationRisk};

/// One labeled benchmark case. The atomic unit of the corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    /// Globally unique within the corpus, stable once assigned, never reused.
    pub id: String,
    /// Fixed-enumeration category, or a preserved unknown.
    pub category: Category,
    /// The prompt shown to the system under test.
    pub question: String,
    /// The candidate AI-generated text being judged.
    pub output: String,
    /// True if `output` is acceptable, false if it embeds a known defect.
    pub ground_truth: bool,
    /// Tags the verifier under test is expected to raise. Order-insensitive.
    #[serde(default)]
    pub expected_flags: Vec<String>,
    /// Free-text rationale for why the case is diagnostic.
    #[serde(default)]
    pub notes: String,
    pub difficulty: Difficulty,
    /// Exact false statement embedded in `output`. Claim-injection only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injected_false_claim: Option<String>,
    /// The true statement the injected claim displaces. Claim-injection only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_fact: Option<String>,
    /// Claim-injection only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propagation_risk: Option<PropagationRisk>,
    /// Set only on engine-generated cases.
    #[serde(flatten)]
    pub provenance: Provenance,
}
