//! Common test utilities
//!
//! This module provides shared test helpers and fixtures for all
//! integration tests: bootstrapped mock-backed sessions and pre-scripted
//! element sets.

use std::sync::Arc;

use anyhow::Context;
use browser_batch::driver::{ElementHandle, MockDriverSession};
use browser_batch::{BatchSession, Config};

/// Selector used by the list fixtures
pub const ITEM_SELECTOR: &str = ".item";

/// Bootstrap a mock-backed session with default configuration
pub fn setup_session() -> (BatchSession, Arc<MockDriverSession>) {
    browser_batch::testing::mock_session()
}

/// Bootstrap a mock-backed session with a custom settle pause
pub fn setup_session_with_pause(settle_pause_ms: u64) -> (BatchSession, Arc<MockDriverSession>) {
    let config = Config {
        settle_pause_ms,
        ..Config::default()
    };
    browser_batch::testing::mock_session_with_config(config)
}

/// Script a three-element `.item` list and return its handles
pub async fn seed_item_list(driver: &MockDriverSession) -> Vec<ElementHandle> {
    driver.set_elements(ITEM_SELECTOR, 3).await
}

/// Write a throwaway TOML config file and load it back
pub fn write_and_load_config(name: &str, contents: &str) -> anyhow::Result<Config> {
    let path = std::env::temp_dir().join(name);
    std::fs::write(&path, contents).context("Failed to write temp config file")?;

    let config = Config::from_file(path.to_str().context("Temp path is not valid UTF-8")?);
    let _ = std::fs::remove_file(&path);

    Ok(config?)
}
