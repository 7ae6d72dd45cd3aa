//! Like toggling.

use crate::engine::CatalogEngine;
use crate::error::{CatalogError, Result};
use crate::providers::TicketCodeEncoder;
use crate::store::CatalogStore;
use crate::types::{GameId, LikeStatus, UserId};
use tracing::info;

impl<S, C> CatalogEngine<S, C>
where
    S: CatalogStore,
    C: TicketCodeEncoder,
{
    /// Flip whether a user likes a game and report the resulting state.
    ///
    /// The like relation is stored once as (game, user) pairs; the `likes`
    /// lists on [`crate::types::Game`] and [`crate::types::User`] are views
    /// derived from it, so a toggle can never leave the two sides disagreeing.
    ///
    /// # Errors
    ///
    /// Returns `GameNotFound` if the game does not exist, or `Store` on
    /// persistence failure.
    pub async fn toggle_like(&self, user_id: UserId, game_id: GameId) -> Result<LikeStatus> {
        let status = self
            .store
            .toggle_like(game_id, user_id)
            .await?
            .ok_or(CatalogError::GameNotFound(game_id))?;

        info!(game_id = %game_id, user_id = %user_id, ?status, "like toggled");
        Ok(status)
    }
}
