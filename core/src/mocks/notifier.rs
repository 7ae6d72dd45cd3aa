//! Mock ticket notifiers.

use crate::error::{CatalogError, Result};
use crate::notify::TicketNotification;
use crate::providers::TicketNotifier;
use std::sync::{Arc, Mutex};

/// Notifier that records every notification it receives.
///
/// Clones share the same record, so tests keep one handle and hand another
/// to the worker.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<TicketNotification>>>,
}

impl RecordingNotifier {
    /// Create a new recording notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every notification delivered so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    #[allow(clippy::unwrap_used)] // Test infrastructure
    pub fn sent(&self) -> Vec<TicketNotification> {
        self.sent.lock().unwrap().clone()
    }
}

impl TicketNotifier for RecordingNotifier {
    async fn send_ticket(&self, notification: &TicketNotification) -> Result<()> {
        #[allow(clippy::unwrap_used)] // Test infrastructure
        self.sent.lock().unwrap().push(notification.clone());
        Ok(())
    }
}

/// Notifier that fails every delivery with a fixed reason.
#[derive(Debug, Clone)]
pub struct FailingNotifier {
    reason: String,
}

impl FailingNotifier {
    /// Create a notifier that always fails with `reason`.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl TicketNotifier for FailingNotifier {
    async fn send_ticket(&self, _notification: &TicketNotification) -> Result<()> {
        Err(CatalogError::Delivery(self.reason.clone()))
    }
}
