//! Test bootstrap helpers
//!
//! One-stop setup for exercising the batch commands against the mock
//! driver: a process-wide tracing subscriber and a mock-backed session
//! factory shared by the unit and integration tests.

use std::sync::{Arc, Once};

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::commands::session::BatchSession;
use crate::config::Config;
use crate::driver::mock::MockDriverSession;

static TRACING_INIT: Once = Once::new();

/// Initialize the tracing subscriber once per process
///
/// `RUST_LOG` wins over the configured level so a test run can be made
/// verbose without touching the config.
pub fn init_tracing(config: &Config) {
    TRACING_INIT.call_once(|| {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|v| v.parse::<Level>().ok())
            .or_else(|| config.log_level.parse::<Level>().ok())
            .unwrap_or(Level::INFO);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .finish();

        // The embedding test harness may have installed its own subscriber
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

/// Create a mock-backed session with default configuration
///
/// Returns the session together with the mock handle so tests can script
/// element sets and inspect the recorded commands.
pub fn mock_session() -> (BatchSession, Arc<MockDriverSession>) {
    mock_session_with_config(Config::default())
}

/// Create a mock-backed session with explicit configuration
pub fn mock_session_with_config(config: Config) -> (BatchSession, Arc<MockDriverSession>) {
    init_tracing(&config);

    let driver = Arc::new(MockDriverSession::new());
    (BatchSession::with_config(driver.clone(), config), driver)
}
