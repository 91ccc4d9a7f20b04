//! # crucible-core
//!
//! Foundation crate for the Crucible corpus engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod case;
pub mod config;
pub mod constants;
pub mod corpus;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use case::{Case, Category, Difficulty, PropagationRisk, Provenance};
pub use config::{CrucibleConfig, EvolveConfig, ProviderConfig};
pub use corpus::Corpus;
pub use errors::{CrucibleError, CrucibleResult};
