pub mod gap_report;
pub mod run_report;
pub mod sanity;

pub use gap_report::{CategoryCoverage, GapReport};
pub use run_report::{CategoryResult, RunReport};
pub use sanity::SanityVerdict;
