//! CorpusStore — load/save of the single corpus document.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use crucible_core::errors::{CrucibleResult, StoreError};
use crucible_core::Corpus;
use tracing::{info, warn};

/// Handle to the corpus document on disk.
#[derive(Debug, Clone)]
pub struct CorpusStore {
    path: PathBuf,
}

impl CorpusStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the corpus. A missing file bootstraps an empty corpus so a
    /// first run can seed storage; a present-but-unparsable file is fatal.
    pub fn load(&self) -> CrucibleResult<Corpus> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "corpus file missing, starting empty");
                return Ok(Corpus::empty(&today()));
            }
            Err(e) => {
                return Err(StoreError::Io {
                    path: self.path.display().to_string(),
                    source: e,
                }
                .into());
            }
        };

        let corpus: Corpus = serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        info!(
            path = %self.path.display(),
            cases = corpus.cases.len(),
            evolved = corpus.evolved_count,
            "corpus loaded"
        );
        Ok(corpus)
    }

    /// Replace the document atomically: serialize the full next state,
    /// write to a sibling temp file, then rename over the original.
    pub fn save(&self, corpus: &Corpus) -> CrucibleResult<()> {
        let body = serde_json::to_string_pretty(corpus).map_err(StoreError::Serialize)?;

        let tmp = self.path.with_extension("json.tmp");
        let write = || -> std::io::Result<()> {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(body.as_bytes())?;
            file.write_all(b"\n")?;
            file.sync_all()?;
            fs::rename(&tmp, &self.path)?;
            Ok(())
        };
        write().map_err(|e| StoreError::Io {
            path: self.path.display().to_string(),
            source: e,
        })?;

        info!(
            path = %self.path.display(),
            cases = corpus.cases.len(),
            "corpus written"
        );
        Ok(())
    }
}

/// Today's date as an ISO `YYYY-MM-DD` string.
pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}
