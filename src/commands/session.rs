//! Session wrapper binding a driver handle to configured defaults

use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

use crate::commands::batch::BatchCommands;
use crate::config::Config;
use crate::driver::traits::DriverSession;
use crate::error::Result;

/// Shared driver handle with configured command defaults
///
/// Build one per test session and call the batch operations as methods.
/// Cloning is cheap; clones share the same underlying driver handle.
#[derive(Debug, Clone)]
pub struct BatchSession {
    driver: Arc<dyn DriverSession>,
    config: Config,
}

impl BatchSession {
    /// Create a session with default configuration
    pub fn new(driver: Arc<dyn DriverSession>) -> Self {
        Self::with_config(driver, Config::default())
    }

    /// Create a session with explicit configuration
    pub fn with_config(driver: Arc<dyn DriverSession>, config: Config) -> Self {
        Self { driver, config }
    }

    /// The underlying driver handle
    pub fn driver(&self) -> Arc<dyn DriverSession> {
        self.driver.clone()
    }

    /// The session configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Wait until every selector in `selectors` has a visible element
    #[instrument(skip(self))]
    pub async fn wait_for_all_visible(&self, selectors: &[&str]) -> Result<()> {
        self.driver.wait_for_all_visible(selectors).await
    }

    /// Number of elements currently matching `selector`
    #[instrument(skip(self))]
    pub async fn get_number_of_elements(&self, selector: &str) -> Result<usize> {
        self.driver.get_number_of_elements(selector).await
    }

    /// Click the element at 1-based `rank` among those matching `selector`
    #[instrument(skip(self))]
    pub async fn click_nth_element(&self, selector: &str, rank: usize) -> Result<()> {
        self.driver.click_nth_element(selector, rank).await
    }

    /// Click the first element matching `selector`
    #[instrument(skip(self))]
    pub async fn click_first_element(&self, selector: &str) -> Result<()> {
        self.driver.click_first_element(selector).await
    }

    /// Click the last element matching `selector`
    #[instrument(skip(self))]
    pub async fn click_last_element(&self, selector: &str) -> Result<()> {
        self.driver.click_last_element(selector).await
    }

    /// Scroll relative to `selector`, pause, then re-resolve and click
    ///
    /// Passing `None` for `pause` uses the configured settle pause.
    #[instrument(skip(self))]
    pub async fn scroll_and_click(
        &self,
        selector: &str,
        h_offset: i64,
        v_offset: i64,
        pause: Option<Duration>,
    ) -> Result<()> {
        let pause = pause.unwrap_or_else(|| self.config.settle_pause());
        self.driver
            .scroll_and_click(selector, h_offset, v_offset, Some(pause))
            .await
    }
}
