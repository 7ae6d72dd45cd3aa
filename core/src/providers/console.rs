//! Console ticket notifier.
//!
//! Logs notifications instead of sending them. In production, replace with
//! [`crate::providers::SmtpTicketNotifier`].

use crate::error::Result;
use crate::notify::TicketNotification;
use crate::providers::TicketNotifier;
use tracing::info;

/// Console notifier for demo/development purposes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleTicketNotifier;

impl ConsoleTicketNotifier {
    /// Create a new console notifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TicketNotifier for ConsoleTicketNotifier {
    async fn send_ticket(&self, notification: &TicketNotification) -> Result<()> {
        info!(
            "\n\n\
            ┌────────────────────────────────────────────────────────────────┐\n\
            │                     Ticket Notification                        │\n\
            ├────────────────────────────────────────────────────────────────┤\n\
            │ To: {:<58} │\n\
            │                                                                │\n\
            │ Your ticket is ready. View it here:                            │\n\
            │ {}  \n\
            │                                                                │\n\
            │ ({} bytes of scannable code omitted)                           \n\
            └────────────────────────────────────────────────────────────────┘\n",
            notification.to,
            notification.ticket_url,
            notification.qrcode.as_str().len()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CodePayload, TicketId};

    #[tokio::test]
    async fn test_console_notifier_always_succeeds() {
        let notifier = ConsoleTicketNotifier::new();
        let result = notifier
            .send_ticket(&TicketNotification {
                to: "guest@example.com".to_string(),
                ticket_id: TicketId::new(),
                ticket_url: "http://localhost:3000/ticket/demo".to_string(),
                qrcode: CodePayload::new("data:image/png;base64,AAAA".to_string()),
            })
            .await;

        assert!(result.is_ok());
    }
}
