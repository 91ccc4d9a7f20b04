pub mod generator;
pub mod sanity;

pub use generator::CaseGenerator;
pub use sanity::SanityValidator;
