//! # crucible-store
//!
//! Persistence for the corpus document: one JSON file, read once per run,
//! replaced atomically once per run. The write is the only mutation of
//! durable state, so an interrupt at any earlier point leaves the on-disk
//! corpus in its prior valid state.

pub mod engine;

pub use engine::CorpusStore;
