//! Batch element interaction commands
//!
//! Higher-level operations composed from the driver's primitive element
//! queries and click/scroll actions.

use async_trait::async_trait;
use futures::future::try_join_all;
use std::time::Duration;
use tracing::debug;

use crate::driver::traits::DriverSession;
use crate::error::{Error, Result};

/// Default settle pause after a scroll, in milliseconds
pub const DEFAULT_SETTLE_PAUSE_MS: u64 = 200;

/// Batch element interaction commands
///
/// Provided for every [`DriverSession`] through a blanket implementation,
/// so call sites read as if these were native session operations.
#[async_trait]
pub trait BatchCommands: DriverSession {
    /// Wait until every selector in `selectors` has a visible element
    ///
    /// Issues one visibility wait per selector, concurrently. The first
    /// failing wait fails the whole operation; outstanding waits are
    /// dropped, which cancels them. An empty collection resolves
    /// immediately without touching the driver.
    async fn wait_for_all_visible(&self, selectors: &[&str]) -> Result<()> {
        debug!("Waiting for {} selectors to become visible", selectors.len());

        try_join_all(selectors.iter().map(|selector| async move {
            self.wait_until_visible(selector)
                .await
                .map_err(|source| Error::wait_failed(*selector, source))
        }))
        .await?;

        Ok(())
    }

    /// Number of elements currently matching `selector`
    ///
    /// Zero matches is a valid count, not an error.
    async fn get_number_of_elements(&self, selector: &str) -> Result<usize> {
        let elements = self.query_elements(selector).await?;
        debug!("Selector {:?} matched {} elements", selector, elements.len());
        Ok(elements.len())
    }

    /// Click the element at `rank` among those matching `selector`
    ///
    /// Ranks are 1-based: the first element is at rank 1. The element set
    /// is resolved once; the click targets the handle as resolved at query
    /// time. A rank of 0 or one past the set size fails with
    /// [`Error::RankOutOfRange`] and issues no click.
    async fn click_nth_element(&self, selector: &str, rank: usize) -> Result<()> {
        let elements = self.query_elements(selector).await?;

        let handle = rank
            .checked_sub(1)
            .and_then(|index| elements.get(index))
            .ok_or_else(|| Error::rank_out_of_range(selector, rank, elements.len()))?;

        debug!("Clicking element at rank {} for selector {:?}", rank, selector);
        self.click_element(handle).await
    }

    /// Click the first element matching `selector`
    async fn click_first_element(&self, selector: &str) -> Result<()> {
        self.click_nth_element(selector, 1).await
    }

    /// Click the last element matching `selector`
    async fn click_last_element(&self, selector: &str) -> Result<()> {
        let elements = self.query_elements(selector).await?;

        let handle = elements
            .last()
            .ok_or_else(|| Error::rank_out_of_range(selector, elements.len(), elements.len()))?;

        debug!(
            "Clicking element at rank {} (last) for selector {:?}",
            elements.len(),
            selector
        );
        self.click_element(handle).await
    }

    /// Scroll relative to `selector`, pause, then re-resolve and click
    ///
    /// Used when a floating overlay hides the target: scrolling moves the
    /// target out from under the overlay, and the settle pause gives the
    /// overlay time to disappear before the click. The scroll, the pause
    /// (`pause`, default [`DEFAULT_SETTLE_PAUSE_MS`]) and the click happen
    /// strictly in that order; a failure at any step stops the sequence
    /// and propagates. The click is not retried.
    async fn scroll_and_click(
        &self,
        selector: &str,
        h_offset: i64,
        v_offset: i64,
        pause: Option<Duration>,
    ) -> Result<()> {
        let pause = pause.unwrap_or(Duration::from_millis(DEFAULT_SETTLE_PAUSE_MS));

        self.scroll_into_offset(selector, h_offset, v_offset).await?;

        debug!(
            "Settle pause of {}ms after scrolling {:?}",
            pause.as_millis(),
            selector
        );
        tokio::time::sleep(pause).await;

        let handle = self.query_element(selector).await?;
        self.click_element(&handle).await
    }
}

impl<S: DriverSession + ?Sized> BatchCommands for S {}
