//! Background delivery of ticket notifications.
//!
//! Ticket issuance must not wait on a mail server, so the engine only
//! enqueues a [`TicketNotification`]; a [`NotificationWorker`] owns the
//! receiving end and a [`TicketNotifier`], attempts delivery, and records
//! the outcome. Delivery failure is logged at WARN and never reaches the
//! issuance caller.

use crate::providers::TicketNotifier;
use crate::types::{CodePayload, TicketId};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// One ticket notification to deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketNotification {
    /// Recipient email address.
    pub to: String,
    /// Ticket the notification is about.
    pub ticket_id: TicketId,
    /// Canonical access URL for the ticket.
    pub ticket_url: String,
    /// Scannable payload to embed in the message body.
    pub qrcode: CodePayload,
}

/// Cloneable handle the engine uses to enqueue notifications.
#[derive(Debug, Clone)]
pub struct NotificationSender {
    tx: mpsc::UnboundedSender<TicketNotification>,
}

impl NotificationSender {
    /// Hand a notification to the background worker.
    ///
    /// If the worker has shut down the notification is dropped with a
    /// warning; the ticket itself is already persisted and stays valid.
    pub fn enqueue(&self, notification: TicketNotification) {
        if let Err(rejected) = self.tx.send(notification) {
            warn!(
                ticket_id = %rejected.0.ticket_id,
                "notification worker is gone; dropping ticket notification"
            );
        }
    }
}

/// Background task draining the notification queue.
pub struct NotificationWorker<N> {
    rx: mpsc::UnboundedReceiver<TicketNotification>,
    notifier: N,
}

impl<N> NotificationWorker<N>
where
    N: TicketNotifier + Send + 'static,
{
    /// Create a worker and the sender feeding it.
    #[must_use]
    pub fn new(notifier: N) -> (NotificationSender, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (NotificationSender { tx }, Self { rx, notifier })
    }

    /// Spawn the worker onto the current runtime.
    ///
    /// The task ends once every sender handle has been dropped and the
    /// queue is drained, so awaiting the handle after shutdown flushes
    /// pending notifications.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    async fn run(mut self) {
        while let Some(notification) = self.rx.recv().await {
            match self.notifier.send_ticket(&notification).await {
                Ok(()) => info!(
                    ticket_id = %notification.ticket_id,
                    to = %notification.to,
                    "ticket notification sent"
                ),
                Err(error) => warn!(
                    ticket_id = %notification.ticket_id,
                    to = %notification.to,
                    %error,
                    "ticket notification failed"
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)] // Test code

    use super::*;
    use crate::mocks::{FailingNotifier, RecordingNotifier};
    use crate::types::CodePayload;

    fn notification() -> TicketNotification {
        TicketNotification {
            to: "guest@example.com".to_string(),
            ticket_id: TicketId::new(),
            ticket_url: "http://localhost:3000/ticket/abc".to_string(),
            qrcode: CodePayload::new("data:image/png;base64,AAAA".to_string()),
        }
    }

    #[tokio::test]
    async fn test_worker_delivers_enqueued_notifications() {
        let recorder = RecordingNotifier::new();
        let (sender, worker) = NotificationWorker::new(recorder.clone());
        let handle = worker.spawn();

        let expected = notification();
        sender.enqueue(expected.clone());
        drop(sender);
        handle.await.unwrap();

        assert_eq!(recorder.sent(), vec![expected]);
    }

    #[tokio::test]
    async fn test_worker_survives_delivery_failure() {
        let (sender, worker) = NotificationWorker::new(FailingNotifier::new("smtp down"));
        let handle = worker.spawn();

        sender.enqueue(notification());
        sender.enqueue(notification());
        drop(sender);

        // The worker drains the queue without panicking or aborting.
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_enqueue_after_worker_shutdown_is_dropped() {
        let recorder = RecordingNotifier::new();
        let (sender, worker) = NotificationWorker::new(recorder.clone());
        drop(worker);

        sender.enqueue(notification());
        assert!(recorder.sent().is_empty());
    }
}
