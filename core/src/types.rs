//! Domain types for the game catalog.
//!
//! Identifiers are UUID newtypes so a `TicketId` can never be passed where a
//! `GameId` is expected. `Game.likes` and `User.likes` are *derived views*:
//! the store keeps the like relation once, as a set of (game, user) pairs,
//! and fills both views on read (see [`crate::store::CatalogStore`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a game in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(Uuid);

impl GameId {
    /// Generate a new random game ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a user.
///
/// Users are owned by the authentication collaborator; the catalog only
/// references them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a new random user ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentId(Uuid);

impl CommentId {
    /// Generate a new random comment ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CommentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketId(Uuid);

impl TicketId {
    /// Generate a new random ticket ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TicketId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TicketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role supplied by the authorization collaborator.
///
/// The engine never resolves roles itself; callers pass the role attached to
/// the authenticated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Administrator: may mutate the catalog and delete any comment.
    Admin,
    /// Standard authenticated user.
    Standard,
}

impl Role {
    /// Whether this role carries administrator privileges.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// A validated rating score in `0..=5`.
///
/// Range enforcement lives at construction so a [`Rating`] can never hold an
/// out-of-range value; request-schema validation stays with the transport
/// layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    /// Highest allowed score.
    pub const MAX: u8 = 5;

    /// Create a score, rejecting values above [`Score::MAX`].
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Score {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("score {value} out of range 0..={}", Self::MAX))
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.value()
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single user's rating of a game.
///
/// Invariant: within one game's `ratings`, each `user_id` appears at most
/// once. The store enforces this with an atomic conditional insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// User who rated.
    pub user_id: UserId,
    /// Their score.
    pub value: Score,
}

/// Arithmetic mean of a set of ratings, `0.0` when empty.
///
/// Stores call this inside the same critical section that appends a rating,
/// so the persisted `rating_average` can never lag behind `ratings`.
#[must_use]
pub fn rating_mean(ratings: &[Rating]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: u32 = ratings.iter().map(|r| u32::from(r.value.value())).sum();
    #[allow(clippy::cast_precision_loss)] // Counts stay far below 2^52
    let count = ratings.len() as f64;
    f64::from(sum) / count
}

/// Base64 PNG data-URL encoding of a ticket's access URL.
///
/// Invariant: a persisted payload always encodes the canonical access URL of
/// the ticket it is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodePayload(String);

impl CodePayload {
    /// Wrap an already-encoded payload.
    #[must_use]
    pub const fn new(data_url: String) -> Self {
        Self(data_url)
    }

    /// The payload as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for CodePayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// Unique identifier.
    pub id: GameId,
    /// Display name.
    pub name: String,
    /// Image reference (URL).
    pub image: String,
    /// Price.
    pub price: f64,
    /// Per-user ratings, one entry per distinct user.
    pub ratings: Vec<Rating>,
    /// Arithmetic mean of `ratings`, `0.0` when empty. Derived field, kept
    /// in sync by the rating subsystem.
    pub rating_average: f64,
    /// Identifiers of comments attached to this game, in creation order.
    pub comments: Vec<CommentId>,
    /// Users who like this game. Derived view over the like relation.
    pub likes: Vec<UserId>,
}

impl Game {
    /// Create a new game with empty collections.
    #[must_use]
    pub fn new(name: impl Into<String>, image: impl Into<String>, price: f64) -> Self {
        Self {
            id: GameId::new(),
            name: name.into(),
            image: image.into(),
            price,
            ratings: Vec::new(),
            rating_average: 0.0,
            comments: Vec::new(),
            likes: Vec::new(),
        }
    }
}

/// Name, image and price of a game — the only fields admins may mutate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDraft {
    /// Display name.
    pub name: String,
    /// Image reference (URL).
    pub image: String,
    /// Price.
    pub price: f64,
}

/// A comment attached to a game.
///
/// `owner` and `game_id` are immutable after creation; only `text` may be
/// edited, and only by the owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique identifier.
    pub id: CommentId,
    /// Game this comment is attached to.
    pub game_id: GameId,
    /// Author.
    pub owner: UserId,
    /// Comment body.
    pub text: String,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment.
    #[must_use]
    pub fn new(
        game_id: GameId,
        owner: UserId,
        text: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: CommentId::new(),
            game_id,
            owner,
            text: text.into(),
            created_at,
        }
    }
}

/// A purchase/access record for a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique identifier.
    pub id: TicketId,
    /// Free-form purchase/visit date supplied by the buyer.
    pub date: String,
    /// Game this ticket grants access to.
    pub game_id: GameId,
    /// Buyer.
    pub owner: UserId,
    /// Scannable encoding of the ticket's access URL; absent until code
    /// generation succeeds.
    pub qrcode: Option<CodePayload>,
    /// When the ticket was issued.
    pub created_at: DateTime<Utc>,
}

impl Ticket {
    /// Create a new ticket without a code payload.
    #[must_use]
    pub fn new(
        game_id: GameId,
        owner: UserId,
        date: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TicketId::new(),
            date: date.into(),
            game_id,
            owner,
            qrcode: None,
            created_at,
        }
    }
}

/// A referenced user record.
///
/// The catalog maintains the `tickets` back-reference; `likes` is a derived
/// view over the like relation, mirroring [`Game::likes`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: UserId,
    /// Contact address for ticket notifications.
    pub email: String,
    /// Games this user likes. Derived view over the like relation.
    pub likes: Vec<GameId>,
    /// Tickets this user owns.
    pub tickets: Vec<TicketId>,
}

impl User {
    /// Create a new user record with empty collections.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            email: email.into(),
            likes: Vec::new(),
            tickets: Vec::new(),
        }
    }
}

/// Resulting membership state after a like toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LikeStatus {
    /// The user now likes the game.
    Liked,
    /// The user's like was removed.
    Unliked,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_rejects_out_of_range() {
        assert!(Score::new(0).is_some());
        assert!(Score::new(5).is_some());
        assert!(Score::new(6).is_none());
        assert!(Score::try_from(9).is_err());
    }

    #[test]
    fn test_ids_are_distinct_types_and_unique() {
        let a = GameId::new();
        let b = GameId::new();
        assert_ne!(a, b);
        assert_eq!(a, GameId::from_uuid(*a.as_uuid()));
    }

    #[test]
    fn test_new_game_starts_empty() {
        let game = Game::new("Space Mountain", "https://img.example/sm.png", 40.0);
        assert!(game.ratings.is_empty());
        assert!(game.comments.is_empty());
        assert!(game.likes.is_empty());
        assert_eq!(game.rating_average, 0.0);
    }

    #[test]
    fn test_mean_of_empty_is_zero() {
        assert_eq!(rating_mean(&[]), 0.0);
    }

    #[test]
    fn test_mean_of_four_and_two_is_three() {
        #[allow(clippy::unwrap_used)] // Test code
        let rating = |value: u8| Rating {
            user_id: UserId::new(),
            value: Score::new(value).unwrap(),
        };
        assert_eq!(rating_mean(&[rating(4), rating(2)]), 3.0);
    }
}
