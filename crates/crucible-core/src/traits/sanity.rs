use crate::models::SanityVerdict;

/// External per-case sanity check against a case's question.
///
/// Infallible by contract: timeouts and non-zero exits are failed
/// verdicts, never faults of the run.
pub trait SanityValidator {
    fn check(&self, question: &str) -> impl std::future::Future<Output = SanityVerdict>;
}
