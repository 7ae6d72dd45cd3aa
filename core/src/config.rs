//! Catalog configuration.
//!
//! Configuration values are provided by the application, not read from the
//! environment inside the engine.

use crate::types::TicketId;

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL used to build ticket access links
    /// (e.g., "<https://app.example.com>").
    ///
    /// Ticket links are formatted as: `{base_url}/ticket/{ticket_id}`
    pub base_url: String,
}

impl CatalogConfig {
    /// Create a new configuration.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Canonical access URL for a ticket.
    #[must_use]
    pub fn ticket_url(&self, ticket_id: TicketId) -> String {
        format!("{}/ticket/{ticket_id}", self.base_url)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }
}

/// SMTP transport configuration for the ticket notifier.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP server address (e.g., "smtp.gmail.com").
    pub server: String,
    /// SMTP server port (usually 587 for TLS).
    pub port: u16,
    /// SMTP authentication username.
    pub username: String,
    /// SMTP authentication password.
    pub password: String,
    /// Sender email address.
    pub from_email: String,
    /// Sender display name.
    pub from_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_url_format() {
        let config = CatalogConfig::new("https://park.example.com");
        let id = TicketId::new();
        assert_eq!(
            config.ticket_url(id),
            format!("https://park.example.com/ticket/{id}")
        );
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(CatalogConfig::default().base_url, "http://localhost:3000");
    }
}
