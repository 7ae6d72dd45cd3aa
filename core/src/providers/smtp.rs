//! SMTP ticket notifier using Lettre.

use crate::config::SmtpConfig;
use crate::error::{CatalogError, Result};
use crate::notify::TicketNotification;
use crate::providers::TicketNotifier;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

/// SMTP notifier that emails the ticket link and embedded code.
///
/// Suitable for production use; sends run on the blocking thread pool so
/// the notification worker's queue loop is never stalled by the transport.
#[derive(Clone)]
pub struct SmtpTicketNotifier {
    server: String,
    port: u16,
    credentials: Credentials,
    from_email: String,
    from_name: String,
}

impl SmtpTicketNotifier {
    /// Create a new SMTP notifier from configuration.
    #[must_use]
    pub fn new(config: SmtpConfig) -> Self {
        Self {
            server: config.server,
            port: config.port,
            credentials: Credentials::new(config.username, config.password),
            from_email: config.from_email,
            from_name: config.from_name,
        }
    }

    /// Build SMTP transport for sending emails.
    ///
    /// Creates a new transport for each email to avoid connection pooling
    /// issues.
    fn build_transport(&self) -> Result<SmtpTransport> {
        Ok(SmtpTransport::relay(&self.server)
            .map_err(|e| CatalogError::Delivery(format!("SMTP relay error: {e}")))?
            .port(self.port)
            .credentials(self.credentials.clone())
            .build())
    }

    /// Build the "From" header.
    fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }
}

impl TicketNotifier for SmtpTicketNotifier {
    async fn send_ticket(&self, notification: &TicketNotification) -> Result<()> {
        let html_body = format!(
            r#"
<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Your ticket</title>
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
    <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
        <h2 style="color: #2563eb;">Your ticket is ready</h2>
        <p>Click the link below to view your ticket, or present the code at the gate.</p>
        <p style="margin: 30px 0;">
            <a href="{ticket_url}"
               style="display: inline-block; background-color: #2563eb; color: white; padding: 12px 24px; text-decoration: none; border-radius: 4px;">
                View Ticket
            </a>
        </p>
        <p><img src="{qrcode}" alt="ticket code"/></p>
        <p style="color: #666; font-size: 12px; margin-top: 40px;">
            Or copy and paste this link into your browser:<br>
            {ticket_url}
        </p>
    </div>
</body>
</html>
            "#,
            ticket_url = notification.ticket_url,
            qrcode = notification.qrcode,
        );

        let email = Message::builder()
            .from(
                self.from_header()
                    .parse()
                    .map_err(|e| CatalogError::Delivery(format!("Invalid from address: {e}")))?,
            )
            .to(notification
                .to
                .parse()
                .map_err(|e| CatalogError::Delivery(format!("Invalid to address: {e}")))?)
            .subject("Ticket verification")
            .header(ContentType::TEXT_HTML)
            .body(html_body)
            .map_err(|e| CatalogError::Delivery(format!("Failed to build email: {e}")))?;

        let mailer = self.build_transport()?;

        tokio::task::spawn_blocking(move || {
            mailer
                .send(&email)
                .map_err(|e| CatalogError::Delivery(format!("Failed to send email: {e}")))
        })
        .await
        .map_err(|e| CatalogError::Delivery(format!("Email task failed: {e}")))?
        .map(|_| ())
    }
}
