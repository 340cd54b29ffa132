//! Browser-Batch: batch element interaction commands for remote browser automation
//!
//! This library layers multi-element convenience commands over an injected
//! remote driver session handle.

pub mod error;
pub mod config;

pub mod driver;
pub mod commands;
pub mod testing;

// Re-exports
pub use error::{Error, Result};

pub use commands::{BatchCommands, BatchSession, DEFAULT_SETTLE_PAUSE_MS};
pub use config::Config;
pub use driver::{DriverSession, ElementHandle};

/// Browser-Batch library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
