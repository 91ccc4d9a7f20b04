use crate::errors::ProviderError;

/// One-shot text generation. The seam between the orchestrator and the
/// provider adapter; tests substitute a canned implementation.
pub trait CaseGenerator {
    /// Identifier of the provider that will author cases, recorded in
    /// provenance.
    fn provider_id(&self) -> &str;

    /// Whether any provider can be attempted at all. A `false` here aborts
    /// a run before the first category is touched.
    fn available(&self) -> bool {
        true
    }

    /// Send a rendered prompt, return the raw response text.
    fn generate(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, ProviderError>>;
}
