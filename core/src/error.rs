//! Error types for catalog mutation operations.

use crate::types::{CommentId, GameId, TicketId, UserId};
use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Error taxonomy for the aggregate-mutation engine.
///
/// Propagation policy:
/// - `GameNotFound` / `CommentNotFound` / `TicketNotFound` / `UserNotFound`,
///   `Forbidden` and `DuplicateRating` are surfaced directly to the caller
///   as the operation's result and are never retried.
/// - `Encoding` aborts the ticket-issuance workflow but leaves the already
///   persisted ticket intact.
/// - `Delivery` is non-fatal: the notification worker records it and the
///   issuance outcome is unchanged.
/// - `Store` is fatal to the current operation; no automatic retry happens
///   at this layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The referenced game does not exist.
    #[error("game {0} not found")]
    GameNotFound(GameId),

    /// The referenced comment does not exist.
    #[error("comment {0} not found")]
    CommentNotFound(CommentId),

    /// The referenced ticket does not exist.
    #[error("ticket {0} not found")]
    TicketNotFound(TicketId),

    /// The referenced user does not exist.
    #[error("user {0} not found")]
    UserNotFound(UserId),

    /// The requester is neither the owner of the record nor an administrator.
    #[error("unauthorized action")]
    Forbidden,

    /// The user already has a rating entry for this game.
    #[error("user {user_id} already rated game {game_id}")]
    DuplicateRating {
        /// Game the duplicate rating targeted.
        game_id: GameId,
        /// User who already rated.
        user_id: UserId,
    },

    /// Scannable-code generation failed.
    #[error("ticket code generation failed: {0}")]
    Encoding(String),

    /// Notification delivery failed (non-fatal to issuance).
    #[error("notification delivery failed: {0}")]
    Delivery(String),

    /// Persistence-layer failure.
    #[error("storage failure: {0}")]
    Store(String),
}

impl CatalogError {
    /// Whether this error means a referenced entity is absent.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::GameNotFound(_)
                | Self::CommentNotFound(_)
                | Self::TicketNotFound(_)
                | Self::UserNotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let id = GameId::new();
        assert!(CatalogError::GameNotFound(id).is_not_found());
        assert!(!CatalogError::Forbidden.is_not_found());
        assert!(!CatalogError::Store("boom".to_string()).is_not_found());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(CatalogError::Forbidden.to_string(), "unauthorized action");
        assert_eq!(
            CatalogError::Encoding("bad input".to_string()).to_string(),
            "ticket code generation failed: bad input"
        );
    }
}
