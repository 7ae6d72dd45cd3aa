//! Collaborator traits and production implementations.
//!
//! The engine depends on two external collaborators: a scannable-code
//! encoder and a notification dispatcher. Both are abstracted behind traits
//! so tests can substitute deterministic implementations.

mod console;
mod qr;
mod smtp;

pub use console::ConsoleTicketNotifier;
pub use qr::QrTicketEncoder;
pub use smtp::SmtpTicketNotifier;

use crate::error::Result;
use crate::notify::TicketNotification;
use crate::types::CodePayload;
use std::future::Future;

/// Scannable-code encoder.
///
/// Given a ticket access URL, produces an image payload a client can render
/// and a gate scanner can read.
pub trait TicketCodeEncoder: Send + Sync {
    /// Encode a URL as a scannable image payload.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CatalogError::Encoding`] if generation fails.
    fn encode(&self, url: &str) -> Result<CodePayload>;
}

/// Notification dispatcher.
///
/// This trait abstracts over delivery channels (SMTP, console, a cloud
/// email service). Failures surface as
/// [`crate::CatalogError::Delivery`] and are non-fatal to ticket issuance.
pub trait TicketNotifier: Send + Sync {
    /// Attempt to deliver one ticket notification.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CatalogError::Delivery`] if:
    /// - The transport cannot be reached
    /// - The provider rejects the message
    /// - The recipient address is invalid
    fn send_ticket(
        &self,
        notification: &TicketNotification,
    ) -> impl Future<Output = Result<()>> + Send;
}
