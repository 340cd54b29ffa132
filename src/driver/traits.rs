//! Driver session traits
//!
//! This module defines the abstract interface to the remote
//! browser-automation driver.

use async_trait::async_trait;

use crate::driver::types::ElementHandle;

/// Remote driver session trait
///
/// Represents an open connection to a controllable browser instance. All
/// queries and actions are issued through this contract; the driver owns
/// selector interpretation, visibility polling, and per-call timeouts.
///
/// Implementations must be safe to share behind an `Arc`, but operations
/// against one session are expected to be issued from a single logical
/// caller at a time.
#[async_trait]
pub trait DriverSession: Send + Sync + std::fmt::Debug {
    /// Block until an element matching `selector` is visible
    async fn wait_until_visible(&self, selector: &str) -> Result<(), crate::Error>;

    /// Resolve all elements matching `selector`, in driver-defined
    /// (typically document) order
    ///
    /// An empty result is not an error; a selector the driver cannot
    /// evaluate is.
    async fn query_elements(&self, selector: &str) -> Result<Vec<ElementHandle>, crate::Error>;

    /// Resolve the single (first) element matching `selector`
    async fn query_element(&self, selector: &str) -> Result<ElementHandle, crate::Error>;

    /// Click a previously resolved element
    async fn click_element(&self, handle: &ElementHandle) -> Result<(), crate::Error>;

    /// Scroll the viewport so the element matching `selector` ends up
    /// offset by the given amounts from its natural scroll position
    async fn scroll_into_offset(
        &self,
        selector: &str,
        h_offset: i64,
        v_offset: i64,
    ) -> Result<(), crate::Error>;
}
