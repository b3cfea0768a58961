//! Test-only bootstrap helpers shared by unit tests.

pub mod logging {
    use tracing_subscriber::EnvFilter;

    /// Initialize compact logging for unit tests; safe to call repeatedly.
    pub fn init() {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_test_writer()
            .try_init();
    }
}
