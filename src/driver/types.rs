//! Driver layer type definitions

use serde::{Deserialize, Serialize};

/// Opaque reference to one matched element
///
/// Issued by the driver when a selector is resolved and only meaningful for
/// follow-up actions against that driver. Handles are borrowed per call and
/// discarded after use; they are never re-validated against the live
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementHandle {
    /// Driver-issued element id
    pub element_id: String,
}

impl ElementHandle {
    /// Create a handle from a driver-issued id
    pub fn new<S: Into<String>>(element_id: S) -> Self {
        Self {
            element_id: element_id.into(),
        }
    }

    /// Get the driver-issued element id
    pub fn id(&self) -> &str {
        &self.element_id
    }
}
