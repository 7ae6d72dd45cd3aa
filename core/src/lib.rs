//! # Gamepark Core
//!
//! Aggregate-mutation engine for the Gamepark catalog: games, comments,
//! ratings, likes and ticket issuance.
//!
//! ## Core Concepts
//!
//! - **`CatalogEngine`**: The single entry point for every catalog mutation
//! - **`CatalogStore`**: Async storage contract; the engine never does
//!   read-then-write uniqueness checks, the store exposes them as atomic
//!   operations
//! - **Providers**: Scannable-code encoding and notification delivery behind
//!   traits, with production (QR/SMTP) and development (console)
//!   implementations
//! - **Notification queue**: Ticket emails are fire-and-forget; a background
//!   worker attempts delivery and logs the outcome
//!
//! ## Example
//!
//! ```ignore
//! use gamepark_core::{
//!     CatalogConfig, CatalogEngine, ConsoleTicketNotifier, InMemoryStore,
//!     NotificationWorker, QrTicketEncoder,
//! };
//!
//! let (sender, worker) = NotificationWorker::new(ConsoleTicketNotifier::new());
//! let worker_handle = worker.spawn();
//!
//! let engine = CatalogEngine::new(
//!     InMemoryStore::new(),
//!     QrTicketEncoder::new(),
//!     sender,
//!     CatalogConfig::default(),
//! );
//!
//! let issued = engine.issue_ticket(buyer_id, game_id, "2026-09-12").await?;
//! println!("{}", issued.qrcode);
//! ```

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod memory;
pub mod notify;
pub mod providers;
pub mod store;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod mocks;

pub use clock::{Clock, SystemClock};
pub use config::{CatalogConfig, SmtpConfig};
pub use engine::{CatalogEngine, IssuedTicket};
pub use error::{CatalogError, Result};
pub use memory::InMemoryStore;
pub use notify::{NotificationSender, NotificationWorker, TicketNotification};
pub use providers::{
    ConsoleTicketNotifier, QrTicketEncoder, SmtpTicketNotifier, TicketCodeEncoder, TicketNotifier,
};
pub use store::{CatalogStore, RatingInsert};
pub use types::{
    CodePayload, Comment, CommentId, Game, GameDraft, GameId, LikeStatus, Rating, Role, Score,
    Ticket, TicketId, User, UserId, rating_mean,
};
