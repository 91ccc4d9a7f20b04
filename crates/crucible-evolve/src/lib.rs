//! # crucible-evolve
//!
//! The self-evolving corpus engine. Measures category imbalance, renders
//! generation prompts from live exemplars, screens provider output against
//! the case schema, allocates collision-free identifiers, and merges
//! accepted cases back into the corpus in a single persistence write.

pub mod engine;
pub mod gaps;
pub mod ids;
pub mod prompt;
pub mod sanity;
pub mod schema;

pub use engine::{EvolutionEngine, RunOptions};
pub use sanity::CommandValidator;
