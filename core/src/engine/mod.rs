//! The aggregate-mutation engine.
//!
//! [`CatalogEngine`] is the single entry point for every catalog mutation:
//! game CRUD, comments, ratings, like toggles and ticket issuance. It owns a
//! [`CatalogStore`], a [`TicketCodeEncoder`] and the sending half of the
//! notification queue; authorization decisions use the [`crate::types::Role`]
//! callers attach to each request.

mod comments;
mod likes;
mod ratings;
mod tickets;

pub use tickets::IssuedTicket;

use crate::clock::{Clock, SystemClock};
use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::notify::NotificationSender;
use crate::providers::TicketCodeEncoder;
use crate::store::CatalogStore;
use crate::types::{Game, GameDraft, GameId, Role};
use std::sync::Arc;
use tracing::info;

/// Mutation engine over a catalog store.
pub struct CatalogEngine<S, C> {
    store: S,
    encoder: C,
    notifications: NotificationSender,
    clock: Arc<dyn Clock>,
    config: CatalogConfig,
}

impl<S, C> CatalogEngine<S, C>
where
    S: CatalogStore,
    C: TicketCodeEncoder,
{
    /// Create an engine wired to a store, an encoder and the notification
    /// queue.
    #[must_use]
    pub fn new(
        store: S,
        encoder: C,
        notifications: NotificationSender,
        config: CatalogConfig,
    ) -> Self {
        Self {
            store,
            encoder,
            notifications,
            clock: Arc::new(SystemClock),
            config,
        }
    }

    /// Replace the clock. Tests use this to pin timestamps.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    fn require_admin(role: Role) -> Result<()> {
        if role.is_admin() {
            Ok(())
        } else {
            Err(CatalogError::Forbidden)
        }
    }

    // ── Games ────────────────────────────────────────────────────────────

    /// Add a game to the catalog. Admin only.
    ///
    /// # Errors
    ///
    /// Returns `Forbidden` for non-admin callers, or `Store` on persistence
    /// failure.
    pub async fn create_game(&self, role: Role, draft: GameDraft) -> Result<Game> {
        Self::require_admin(role)?;

        let game = Game::new(draft.name, draft.image, draft.price);
        self.store.insert_game(game.clone()).await?;

        info!(game_id = %game.id, name = %game.name, "game created");
        Ok(game)
    }

    /// Fetch a single game.
    ///
    /// # Errors
    ///
    /// Returns `GameNotFound` if absent, or `Store` on read failure.
    pub async fn get_game(&self, id: GameId) -> Result<Game> {
        self.store
            .get_game(id)
            .await?
            .ok_or(CatalogError::GameNotFound(id))
    }

    /// All games in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `Store` on read failure.
    pub async fn list_games(&self) -> Result<Vec<Game>> {
        self.store.list_games().await
    }

    /// Replace a game's name, image and price. Admin only.
    ///
    /// Ratings, comments and likes are untouched by updates.
    ///
    /// # Errors
    ///
    /// Returns `Forbidden` for non-admin callers, `GameNotFound` if absent,
    /// or `Store` on persistence failure.
    pub async fn update_game(&self, role: Role, id: GameId, draft: GameDraft) -> Result<Game> {
        Self::require_admin(role)?;

        let updated = self
            .store
            .update_game_info(id, draft.name, draft.image, draft.price)
            .await?
            .ok_or(CatalogError::GameNotFound(id))?;

        info!(game_id = %id, "game updated");
        Ok(updated)
    }

    /// Remove a game and everything attached to it. Admin only.
    ///
    /// Comments are cascaded first, then the game record and its like
    /// relation entries go. Tickets referencing the game are deliberately
    /// left in place: they are purchase records, not catalog children.
    ///
    /// # Errors
    ///
    /// Returns `Forbidden` for non-admin callers, `GameNotFound` if absent,
    /// or `Store` on persistence failure.
    pub async fn delete_game(&self, role: Role, id: GameId) -> Result<()> {
        Self::require_admin(role)?;

        let removed_comments = self.store.delete_comments_for_game(id).await?;
        if !self.store.delete_game(id).await? {
            return Err(CatalogError::GameNotFound(id));
        }

        info!(game_id = %id, removed_comments, "game deleted");
        Ok(())
    }
}
