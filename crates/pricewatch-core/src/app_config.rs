use std::path::PathBuf;

/// Process-wide configuration, loaded from the environment at startup and
/// passed by reference to everything that needs it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the JSON price store files.
    pub data_dir: PathBuf,
    /// Path to the products configuration file.
    pub products_path: PathBuf,
    pub log_level: String,
    /// Whole-request timeout for page fetches, in seconds.
    pub request_timeout_secs: u64,
    /// Bounded wait applied to each wait-for-element step, in seconds.
    /// Expiry means "element absent", never invocation cancellation.
    pub element_wait_timeout_secs: u64,
    pub user_agent: String,
    /// Upper bound on concurrently running extraction invocations.
    pub max_concurrent_extractions: usize,
}
