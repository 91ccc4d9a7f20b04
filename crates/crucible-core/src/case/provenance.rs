use serde::{Deserialize, Serialize};

/// How far an injected false claim is likely to travel through downstream
/// synthesis if the verifier misses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropagationRisk {
    Low,
    Medium,
    High,
    Critical,
}

/// Provenance recorded on engine-generated cases. Manually curated cases
/// carry none of these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Provenance {
    /// Always `"evolved"` on engine-generated cases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// ISO date the case was generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated: Option<String>,
    /// Identifier of the provider that authored the case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_by: Option<String>,
    /// Whether the external sanity validator ran on this case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validated: Option<bool>,
    /// Opaque result token from the external validator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_result: Option<String>,
}

impl Provenance {
    /// Provenance for a freshly evolved case.
    pub fn evolved(date: &str, provider: &str) -> Self {
        Self {
            source: Some("evolved".to_string()),
            generated: Some(date.to_string()),
            generated_by: Some(provider.to_string()),
            validated: None,
            validation_result: None,
        }
    }

    /// True when no provenance field is set (manually curated case).
    pub fn is_empty(&self) -> bool {
        self.source.is_none()
            && self.generated.is_none()
            && self.generated_by.is_none()
            && self.validated.is_none()
            && self.validation_result.is_none()
    }
}
