//! Mock scannable-code encoders.

use crate::error::{CatalogError, Result};
use crate::providers::TicketCodeEncoder;
use crate::types::CodePayload;

/// Encoder that returns a fixed payload regardless of the URL.
#[derive(Debug, Clone)]
pub struct StaticEncoder {
    payload: CodePayload,
}

impl StaticEncoder {
    /// Create an encoder that always yields `payload`.
    #[must_use]
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: CodePayload::new(payload.into()),
        }
    }
}

impl Default for StaticEncoder {
    fn default() -> Self {
        Self::new("data:image/png;base64,c3RhdGlj")
    }
}

impl TicketCodeEncoder for StaticEncoder {
    fn encode(&self, _url: &str) -> Result<CodePayload> {
        Ok(self.payload.clone())
    }
}

/// Encoder that fails every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingEncoder;

impl FailingEncoder {
    /// Create an encoder that always fails.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TicketCodeEncoder for FailingEncoder {
    fn encode(&self, _url: &str) -> Result<CodePayload> {
        Err(CatalogError::Encoding("mock encoder failure".to_string()))
    }
}
