/// Corpus store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("corpus io error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("corpus document at {path} is corrupt: {reason}")]
    Corrupt { path: String, reason: String },

    #[error("failed to serialize corpus: {0}")]
    Serialize(#[from] serde_json::Error),
}
