pub mod provider_error;
pub mod store_error;

pub use provider_error::ProviderError;
pub use store_error::StoreError;

/// Top-level error for the Crucible engine.
#[derive(Debug, thiserror::Error)]
pub enum CrucibleError {
    /// Fatal configuration fault: aborts before any category is attempted.
    #[error("configuration fault: {0}")]
    Configuration(String),

    /// Provider-level fault. Per-category: caught and logged by the
    /// orchestrator, never fatal for the run.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Corpus store fault. A failed load or final write is fatal for the
    /// run; the on-disk corpus is untouched either way.
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type CrucibleResult<T> = Result<T, CrucibleError>;
