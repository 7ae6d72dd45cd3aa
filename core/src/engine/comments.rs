//! Comment operations.

use crate::engine::CatalogEngine;
use crate::error::{CatalogError, Result};
use crate::providers::TicketCodeEncoder;
use crate::store::CatalogStore;
use crate::types::{Comment, CommentId, GameId, Role, UserId};
use tracing::info;

impl<S, C> CatalogEngine<S, C>
where
    S: CatalogStore,
    C: TicketCodeEncoder,
{
    /// Attach a new comment to a game.
    ///
    /// The comment record is written first, then registered on the game. If
    /// the game turns out to be missing the record is removed again before
    /// the error surfaces, so no orphan is left behind.
    ///
    /// # Errors
    ///
    /// Returns `GameNotFound` if the game does not exist, or `Store` on
    /// persistence failure.
    pub async fn add_comment(
        &self,
        author: UserId,
        game_id: GameId,
        text: impl Into<String>,
    ) -> Result<Comment> {
        let comment = Comment::new(game_id, author, text, self.clock.now());
        self.store.insert_comment(comment.clone()).await?;

        if !self.store.register_comment(game_id, comment.id).await? {
            self.store.delete_comment(comment.id).await?;
            return Err(CatalogError::GameNotFound(game_id));
        }

        info!(comment_id = %comment.id, game_id = %game_id, "comment added");
        Ok(comment)
    }

    /// All comments on a game, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `GameNotFound` if the game does not exist, or `Store` on read
    /// failure.
    pub async fn list_comments(&self, game_id: GameId) -> Result<Vec<Comment>> {
        if self.store.get_game(game_id).await?.is_none() {
            return Err(CatalogError::GameNotFound(game_id));
        }
        self.store.comments_for_game(game_id).await
    }

    /// Replace a comment's text. Owner only; admins get no exemption here.
    ///
    /// The game is checked before the comment, so a stale game reference
    /// surfaces as `GameNotFound` rather than `CommentNotFound`.
    ///
    /// # Errors
    ///
    /// Returns `GameNotFound` if the game does not exist, `CommentNotFound`
    /// if the comment is absent or attached to a different game, `Forbidden`
    /// if the caller is not the owner, or `Store` on persistence failure.
    pub async fn edit_comment(
        &self,
        actor: UserId,
        game_id: GameId,
        comment_id: CommentId,
        text: impl Into<String>,
    ) -> Result<Comment> {
        let existing = self.comment_on_game(game_id, comment_id).await?;

        if existing.owner != actor {
            return Err(CatalogError::Forbidden);
        }

        self.store
            .set_comment_text(comment_id, text.into())
            .await?
            .ok_or(CatalogError::CommentNotFound(comment_id))
    }

    /// Remove a comment from a game. Allowed for its owner or an admin.
    ///
    /// # Errors
    ///
    /// Returns `GameNotFound` if the game does not exist, `CommentNotFound`
    /// if the comment is absent or attached to a different game, `Forbidden`
    /// if the caller is neither owner nor admin, or `Store` on persistence
    /// failure.
    pub async fn delete_comment(
        &self,
        actor: UserId,
        role: Role,
        game_id: GameId,
        comment_id: CommentId,
    ) -> Result<()> {
        let existing = self.comment_on_game(game_id, comment_id).await?;

        if existing.owner != actor && !role.is_admin() {
            return Err(CatalogError::Forbidden);
        }

        self.store.unregister_comment(game_id, comment_id).await?;
        if !self.store.delete_comment(comment_id).await? {
            return Err(CatalogError::CommentNotFound(comment_id));
        }

        info!(comment_id = %comment_id, game_id = %game_id, "comment deleted");
        Ok(())
    }

    /// Resolve a comment that must exist and belong to the given game.
    async fn comment_on_game(&self, game_id: GameId, comment_id: CommentId) -> Result<Comment> {
        if self.store.get_game(game_id).await?.is_none() {
            return Err(CatalogError::GameNotFound(game_id));
        }
        self.store
            .get_comment(comment_id)
            .await?
            .filter(|comment| comment.game_id == game_id)
            .ok_or(CatalogError::CommentNotFound(comment_id))
    }
}
