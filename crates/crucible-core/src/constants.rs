/// Crucible system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target case count per fixed category.
pub const DEFAULT_TARGET_PER_CATEGORY: usize = 20;

/// Maximum cases requested per category per run.
pub const DEFAULT_BATCH_CAP: usize = 5;

/// Number of gap categories targeted when no explicit override is given.
pub const TOP_GAP_CATEGORIES: usize = 3;

/// Exemplars rendered into a generation prompt, most recent first dropped last.
pub const PROMPT_EXEMPLARS: usize = 3;

/// Marker joined into every allocated identifier.
pub const ID_MARKER: &str = "evo";

/// Minimum zero-padded width of identifier suffixes.
pub const ID_SUFFIX_WIDTH: usize = 3;

/// Ceiling on a single provider call, seconds.
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 120;

/// Ceiling on a single external validator invocation, seconds.
pub const DEFAULT_VALIDATOR_TIMEOUT_SECS: u64 = 30;

/// Maximum tokens requested from a provider per call.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 4096;
