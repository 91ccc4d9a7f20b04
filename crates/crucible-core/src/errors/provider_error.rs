/// Generative provider errors.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("no provider credential configured")]
    Unavailable,

    #[error("provider {provider} call failed: {reason}")]
    CallFailed { provider: String, reason: String },

    #[error("malformed provider response: {reason}")]
    Malformed { reason: String },
}
