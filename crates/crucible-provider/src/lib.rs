//! # crucible-provider
//!
//! The provider adapter: one `generate(prompt) -> raw text` contract over
//! a prioritized list of generative providers. Selection is credential-
//! driven: the primary is attempted iff its credential is configured,
//! the fallback only when the primary credential is absent. A runtime
//! failure of the selected provider surfaces as an error rather than
//! falling through; per-category resilience lives in the orchestrator.

pub mod adapter;
pub mod anthropic;
pub mod extract;
pub mod openai;

pub use adapter::{ProviderAdapter, ProviderKind};
pub use extract::extract_array;
