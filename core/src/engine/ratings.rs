//! Rating operations.

use crate::engine::CatalogEngine;
use crate::error::{CatalogError, Result};
use crate::providers::TicketCodeEncoder;
use crate::store::{CatalogStore, RatingInsert};
use crate::types::{GameId, Rating, Score, UserId};
use tracing::info;

impl<S, C> CatalogEngine<S, C>
where
    S: CatalogStore,
    C: TicketCodeEncoder,
{
    /// Record one user's rating of a game and return the new average.
    ///
    /// The store appends the rating only if the user has no prior entry for
    /// the game, and recomputes `rating_average` inside that same atomic
    /// step; two racing requests can neither double-rate nor publish an
    /// average built from a stale ratings list.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateRating` if the user already rated this game,
    /// `GameNotFound` if the game does not exist, or `Store` on persistence
    /// failure.
    pub async fn rate_game(&self, user_id: UserId, game_id: GameId, score: Score) -> Result<f64> {
        let rating = Rating {
            user_id,
            value: score,
        };

        match self.store.insert_rating_if_absent(game_id, rating).await? {
            RatingInsert::Inserted(average) => {
                info!(game_id = %game_id, user_id = %user_id, %score, average, "game rated");
                Ok(average)
            }
            RatingInsert::DuplicateUser => Err(CatalogError::DuplicateRating { game_id, user_id }),
            RatingInsert::GameMissing => Err(CatalogError::GameNotFound(game_id)),
        }
    }
}
