//! Best-effort structured-data extraction from unstructured provider text.
//!
//! Providers wrap the requested JSON array in surrounding prose more often
//! than not. Extraction is an explicit two-stage parse: locate the first
//! well-bracket-matched `[...]` substring by structural scanning, then
//! attempt a strict parse. Any failure surfaces as `Malformed` rather
//! than partially-parsed data.

use crucible_core::errors::ProviderError;

/// Extract the first top-level JSON array of records from free-form text.
pub fn extract_array(raw: &str) -> Result<Vec<serde_json::Value>, ProviderError> {
    let candidate = locate_array(raw).ok_or_else(|| ProviderError::Malformed {
        reason: "no bracketed array found in response".to_string(),
    })?;

    let values: Vec<serde_json::Value> =
        serde_json::from_str(candidate).map_err(|e| ProviderError::Malformed {
            reason: format!("array substring does not parse: {e}"),
        })?;

    if values.iter().any(|v| !v.is_object()) {
        return Err(ProviderError::Malformed {
            reason: "array contains non-record elements".to_string(),
        });
    }
    Ok(values)
}

/// Slice of `raw` spanning the first balanced `[...]`, honoring JSON
/// string and escape rules so brackets inside string literals don't count.
fn locate_array(raw: &str) -> Option<&str> {
    let bytes = raw.as_bytes();
    let start = raw.find('[')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (offset, &b) in bytes[start..].iter().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match b {
            b'\\' if in_string => escaped = true,
            b'"' => in_string = !in_string,
            b'[' if !in_string => depth += 1,
            b']' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&raw[start..=start + offset]);
                }
            }
            _ => {}
        }
    }
    None
}
