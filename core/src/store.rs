//! Entity store contract.
//!
//! The engine never performs read-then-write sequences for uniqueness or
//! membership decisions: those live here as single atomic operations
//! ([`CatalogStore::insert_rating_if_absent`], [`CatalogStore::toggle_like`]),
//! so two concurrent requests cannot both pass a check and both write.
//! Implementations that cannot express these atomically must serialize
//! mutations per store (the in-memory store holds its write lock for the
//! whole critical section).

use crate::error::Result;
use crate::types::{
    CodePayload, Comment, CommentId, Game, GameId, LikeStatus, Rating, Ticket, TicketId, User,
    UserId,
};

/// Outcome of an atomic conditional rating insert.
#[derive(Debug, Clone, PartialEq)]
pub enum RatingInsert {
    /// The rating was appended and `rating_average` was recomputed and
    /// persisted inside the same critical section; carries the new average.
    Inserted(f64),
    /// The user already has an entry for this game; nothing changed.
    DuplicateUser,
    /// The game does not exist.
    GameMissing,
}

/// Durable storage for catalog entities.
///
/// All methods surface persistence failures as [`crate::CatalogError::Store`].
/// Lookups return `Ok(None)` (or `Ok(false)` for link operations) when the
/// target is absent; translating absence into a `NotFound` error is the
/// engine's job.
pub trait CatalogStore: Send + Sync {
    // ── Games ────────────────────────────────────────────────────────────

    /// Persist a new game.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the write fails.
    async fn insert_game(&self, game: Game) -> Result<()>;

    /// Fetch a game with its like view populated.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the read fails.
    async fn get_game(&self, id: GameId) -> Result<Option<Game>>;

    /// All games, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the read fails.
    async fn list_games(&self) -> Result<Vec<Game>>;

    /// Replace a game's name, image and price. Returns the updated game, or
    /// `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the write fails.
    async fn update_game_info(
        &self,
        id: GameId,
        name: String,
        image: String,
        price: f64,
    ) -> Result<Option<Game>>;

    /// Delete a game and its like-relation entries. Returns `false` if it
    /// did not exist. Comments are cascaded separately via
    /// [`CatalogStore::delete_comments_for_game`].
    ///
    /// # Errors
    ///
    /// Returns `Store` if the write fails.
    async fn delete_game(&self, id: GameId) -> Result<bool>;

    // ── Ratings ──────────────────────────────────────────────────────────

    /// Append a rating iff the user has no existing entry for this game.
    ///
    /// The uniqueness check, the append and the `rating_average` update (via
    /// [`crate::types::rating_mean`]) happen in one atomic step; interleaved
    /// inserts can therefore never persist an average computed from a stale
    /// ratings list.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the write fails.
    async fn insert_rating_if_absent(&self, game_id: GameId, rating: Rating)
    -> Result<RatingInsert>;

    // ── Likes ────────────────────────────────────────────────────────────

    /// Atomically flip the user's membership in the game's like relation.
    ///
    /// The relation is stored once; `Game.likes` and `User.likes` are views
    /// derived from it, so the flip can never leave the two sides
    /// inconsistent. Returns `None` if the game does not exist.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the write fails.
    async fn toggle_like(&self, game_id: GameId, user_id: UserId) -> Result<Option<LikeStatus>>;

    // ── Comments ─────────────────────────────────────────────────────────

    /// Persist a new comment record.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the write fails.
    async fn insert_comment(&self, comment: Comment) -> Result<()>;

    /// Fetch a comment.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the read fails.
    async fn get_comment(&self, id: CommentId) -> Result<Option<Comment>>;

    /// All comments attached to a game, in storage order.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the read fails.
    async fn comments_for_game(&self, game_id: GameId) -> Result<Vec<Comment>>;

    /// Register a comment on its game's `comments` list. Returns `false` if
    /// the game does not exist (the comment record then stays orphaned).
    ///
    /// # Errors
    ///
    /// Returns `Store` if the write fails.
    async fn register_comment(&self, game_id: GameId, comment_id: CommentId) -> Result<bool>;

    /// Replace a comment's text. Owner and game are immutable. Returns the
    /// updated comment, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the write fails.
    async fn set_comment_text(&self, id: CommentId, text: String) -> Result<Option<Comment>>;

    /// Remove a comment from its game's `comments` list. Returns `false` if
    /// the game does not exist.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the write fails.
    async fn unregister_comment(&self, game_id: GameId, comment_id: CommentId) -> Result<bool>;

    /// Delete a comment record. Returns `false` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the write fails.
    async fn delete_comment(&self, id: CommentId) -> Result<bool>;

    /// Delete every comment attached to a game (game-deletion cascade).
    /// Returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the write fails.
    async fn delete_comments_for_game(&self, game_id: GameId) -> Result<u64>;

    // ── Tickets ──────────────────────────────────────────────────────────

    /// Persist a new ticket.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the write fails.
    async fn insert_ticket(&self, ticket: Ticket) -> Result<()>;

    /// Fetch a ticket.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the read fails.
    async fn get_ticket(&self, id: TicketId) -> Result<Option<Ticket>>;

    /// Attach a generated code payload to a ticket. Returns `false` if the
    /// ticket does not exist.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the write fails.
    async fn set_ticket_code(&self, id: TicketId, code: CodePayload) -> Result<bool>;

    // ── Users ────────────────────────────────────────────────────────────

    /// Persist a new user record.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the write fails.
    async fn insert_user(&self, user: User) -> Result<()>;

    /// Fetch a user with the like view populated.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the read fails.
    async fn get_user(&self, id: UserId) -> Result<Option<User>>;

    /// Register a ticket on its buyer's `tickets` list. Returns `false` if
    /// the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the write fails.
    async fn register_ticket(&self, user_id: UserId, ticket_id: TicketId) -> Result<bool>;
}
