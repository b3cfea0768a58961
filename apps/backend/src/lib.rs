#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod health;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod trace_ctx;

#[cfg(test)]
mod test_bootstrap;

// Re-exports for public API
pub use config::words::WordsConfig;
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use extractors::current_player::CurrentPlayer;
pub use middleware::request_trace::RequestTrace;
pub use services::games::GameService;
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
