//! Mock driver implementation for testing
//!
//! This module provides a scriptable mock implementation of the driver
//! session trait for development and testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::driver::traits::DriverSession;
use crate::driver::types::ElementHandle;
use crate::Error;

/// A command issued against the mock driver, in issue order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverCommand {
    WaitUntilVisible {
        selector: String,
    },
    QueryElements {
        selector: String,
    },
    QueryElement {
        selector: String,
    },
    ClickElement {
        element_id: String,
    },
    ScrollIntoOffset {
        selector: String,
        h_offset: i64,
        v_offset: i64,
    },
}

/// Mock driver session
///
/// Serves scripted element sets per selector and records every issued
/// command so tests can assert exact call sequences. Visibility waits can
/// be scripted to fail or to resolve only after a delay.
#[derive(Debug, Default)]
pub struct MockDriverSession {
    element_sets: Arc<Mutex<HashMap<String, Vec<ElementHandle>>>>,
    failing_queries: Arc<Mutex<HashMap<String, String>>>,
    failing_waits: Arc<Mutex<HashMap<String, String>>>,
    wait_delays: Arc<Mutex<HashMap<String, Duration>>>,
    commands: Arc<Mutex<Vec<DriverCommand>>>,
}

impl MockDriverSession {
    /// Create a new mock driver session
    pub fn new() -> Self {
        Self::default()
    }

    /// Script `count` matched elements for `selector`, returning the
    /// handles that will be served
    pub async fn set_elements(&self, selector: &str, count: usize) -> Vec<ElementHandle> {
        let handles: Vec<ElementHandle> = (0..count)
            .map(|_| ElementHandle::new(Uuid::new_v4().to_string()))
            .collect();
        self.set_element_handles(selector, handles.clone()).await;
        handles
    }

    /// Script explicit handles for `selector`
    pub async fn set_element_handles(&self, selector: &str, handles: Vec<ElementHandle>) {
        self.element_sets
            .lock()
            .await
            .insert(selector.to_string(), handles);
    }

    /// Make element queries for `selector` fail
    pub async fn fail_query(&self, selector: &str, message: &str) {
        self.failing_queries
            .lock()
            .await
            .insert(selector.to_string(), message.to_string());
    }

    /// Make `wait_until_visible` fail for `selector`
    pub async fn fail_wait(&self, selector: &str, message: &str) {
        self.failing_waits
            .lock()
            .await
            .insert(selector.to_string(), message.to_string());
    }

    /// Make `wait_until_visible` resolve for `selector` only after `delay`
    pub async fn delay_wait(&self, selector: &str, delay: Duration) {
        self.wait_delays
            .lock()
            .await
            .insert(selector.to_string(), delay);
    }

    /// All commands issued so far, in order
    pub async fn commands(&self) -> Vec<DriverCommand> {
        self.commands.lock().await.clone()
    }

    /// Ids of all elements clicked so far, in order
    pub async fn clicked_element_ids(&self) -> Vec<String> {
        self.commands
            .lock()
            .await
            .iter()
            .filter_map(|command| match command {
                DriverCommand::ClickElement { element_id } => Some(element_id.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of visibility wait requests issued so far
    pub async fn wait_request_count(&self) -> usize {
        self.commands
            .lock()
            .await
            .iter()
            .filter(|command| matches!(command, DriverCommand::WaitUntilVisible { .. }))
            .count()
    }

    async fn record(&self, command: DriverCommand) {
        self.commands.lock().await.push(command);
    }
}

#[async_trait]
impl DriverSession for MockDriverSession {
    async fn wait_until_visible(&self, selector: &str) -> Result<(), Error> {
        self.record(DriverCommand::WaitUntilVisible {
            selector: selector.to_string(),
        })
        .await;

        if let Some(message) = self.failing_waits.lock().await.get(selector) {
            return Err(Error::timeout(message.clone()));
        }

        let delay = self.wait_delays.lock().await.get(selector).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        Ok(())
    }

    async fn query_elements(&self, selector: &str) -> Result<Vec<ElementHandle>, Error> {
        self.record(DriverCommand::QueryElements {
            selector: selector.to_string(),
        })
        .await;

        if let Some(message) = self.failing_queries.lock().await.get(selector) {
            return Err(Error::driver(message.clone()));
        }

        Ok(self
            .element_sets
            .lock()
            .await
            .get(selector)
            .cloned()
            .unwrap_or_default())
    }

    async fn query_element(&self, selector: &str) -> Result<ElementHandle, Error> {
        self.record(DriverCommand::QueryElement {
            selector: selector.to_string(),
        })
        .await;

        if let Some(message) = self.failing_queries.lock().await.get(selector) {
            return Err(Error::driver(message.clone()));
        }

        self.element_sets
            .lock()
            .await
            .get(selector)
            .and_then(|handles| handles.first())
            .cloned()
            .ok_or_else(|| Error::element_not_found(selector))
    }

    async fn click_element(&self, handle: &ElementHandle) -> Result<(), Error> {
        self.record(DriverCommand::ClickElement {
            element_id: handle.id().to_string(),
        })
        .await;
        Ok(())
    }

    async fn scroll_into_offset(
        &self,
        selector: &str,
        h_offset: i64,
        v_offset: i64,
    ) -> Result<(), Error> {
        self.record(DriverCommand::ScrollIntoOffset {
            selector: selector.to_string(),
            h_offset,
            v_offset,
        })
        .await;
        Ok(())
    }
}
