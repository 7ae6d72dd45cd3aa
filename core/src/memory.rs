//! In-memory reference implementation of [`CatalogStore`].
//!
//! Backed by a single `tokio::sync::RwLock`; every mutating method holds the
//! write lock for its whole critical section, which serializes the
//! conditional operations the contract requires. Cloning shares the
//! underlying tables, so tests can seed and inspect state next to an engine
//! that owns a clone.

use crate::error::Result;
use crate::store::{CatalogStore, RatingInsert};
use crate::types::{
    CodePayload, Comment, CommentId, Game, GameId, LikeStatus, Rating, Ticket, TicketId, User,
    UserId, rating_mean,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Game row without the derived like view.
#[derive(Debug, Clone)]
struct GameRow {
    id: GameId,
    name: String,
    image: String,
    price: f64,
    ratings: Vec<Rating>,
    rating_average: f64,
    comments: Vec<CommentId>,
}

/// User row without the derived like view.
#[derive(Debug, Clone)]
struct UserRow {
    id: UserId,
    email: String,
    tickets: Vec<TicketId>,
}

#[derive(Debug, Default)]
struct Tables {
    games: Vec<GameRow>,
    comments: Vec<Comment>,
    tickets: HashMap<TicketId, Ticket>,
    users: HashMap<UserId, UserRow>,
    // Single source of truth for the like relation; Game.likes and
    // User.likes are derived from it on read.
    likes: Vec<(GameId, UserId)>,
}

impl Tables {
    fn game_row(&self, id: GameId) -> Option<&GameRow> {
        self.games.iter().find(|g| g.id == id)
    }

    fn game_row_mut(&mut self, id: GameId) -> Option<&mut GameRow> {
        self.games.iter_mut().find(|g| g.id == id)
    }

    fn game_view(&self, row: &GameRow) -> Game {
        Game {
            id: row.id,
            name: row.name.clone(),
            image: row.image.clone(),
            price: row.price,
            ratings: row.ratings.clone(),
            rating_average: row.rating_average,
            comments: row.comments.clone(),
            likes: self
                .likes
                .iter()
                .filter(|(game_id, _)| *game_id == row.id)
                .map(|(_, user_id)| *user_id)
                .collect(),
        }
    }

    fn user_view(&self, row: &UserRow) -> User {
        User {
            id: row.id,
            email: row.email.clone(),
            likes: self
                .likes
                .iter()
                .filter(|(_, user_id)| *user_id == row.id)
                .map(|(game_id, _)| *game_id)
                .collect(),
            tickets: row.tickets.clone(),
        }
    }
}

/// In-memory [`CatalogStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogStore for InMemoryStore {
    async fn insert_game(&self, game: Game) -> Result<()> {
        let mut tables = self.inner.write().await;
        tables.games.push(GameRow {
            id: game.id,
            name: game.name,
            image: game.image,
            price: game.price,
            ratings: game.ratings,
            rating_average: game.rating_average,
            comments: game.comments,
        });
        Ok(())
    }

    async fn get_game(&self, id: GameId) -> Result<Option<Game>> {
        let tables = self.inner.read().await;
        Ok(tables.game_row(id).map(|row| tables.game_view(row)))
    }

    async fn list_games(&self) -> Result<Vec<Game>> {
        let tables = self.inner.read().await;
        Ok(tables
            .games
            .iter()
            .map(|row| tables.game_view(row))
            .collect())
    }

    async fn update_game_info(
        &self,
        id: GameId,
        name: String,
        image: String,
        price: f64,
    ) -> Result<Option<Game>> {
        let mut tables = self.inner.write().await;
        let Some(row) = tables.game_row_mut(id) else {
            return Ok(None);
        };
        row.name = name;
        row.image = image;
        row.price = price;
        let row = row.clone();
        Ok(Some(tables.game_view(&row)))
    }

    async fn delete_game(&self, id: GameId) -> Result<bool> {
        let mut tables = self.inner.write().await;
        let before = tables.games.len();
        tables.games.retain(|g| g.id != id);
        let removed = tables.games.len() != before;
        if removed {
            // Like-relation entries die with the game.
            tables.likes.retain(|(game_id, _)| *game_id != id);
        }
        Ok(removed)
    }

    async fn insert_rating_if_absent(
        &self,
        game_id: GameId,
        rating: Rating,
    ) -> Result<RatingInsert> {
        let mut tables = self.inner.write().await;
        let Some(row) = tables.game_row_mut(game_id) else {
            return Ok(RatingInsert::GameMissing);
        };
        if row.ratings.iter().any(|r| r.user_id == rating.user_id) {
            return Ok(RatingInsert::DuplicateUser);
        }
        row.ratings.push(rating);
        // The average is maintained under the same lock as the append, so a
        // concurrent insert can never publish a stale value.
        row.rating_average = rating_mean(&row.ratings);
        Ok(RatingInsert::Inserted(row.rating_average))
    }

    async fn toggle_like(&self, game_id: GameId, user_id: UserId) -> Result<Option<LikeStatus>> {
        let mut tables = self.inner.write().await;
        if tables.game_row(game_id).is_none() {
            return Ok(None);
        }
        let position = tables
            .likes
            .iter()
            .position(|pair| *pair == (game_id, user_id));
        match position {
            Some(index) => {
                tables.likes.remove(index);
                Ok(Some(LikeStatus::Unliked))
            },
            None => {
                tables.likes.push((game_id, user_id));
                Ok(Some(LikeStatus::Liked))
            },
        }
    }

    async fn insert_comment(&self, comment: Comment) -> Result<()> {
        let mut tables = self.inner.write().await;
        tables.comments.push(comment);
        Ok(())
    }

    async fn get_comment(&self, id: CommentId) -> Result<Option<Comment>> {
        let tables = self.inner.read().await;
        Ok(tables.comments.iter().find(|c| c.id == id).cloned())
    }

    async fn comments_for_game(&self, game_id: GameId) -> Result<Vec<Comment>> {
        let tables = self.inner.read().await;
        Ok(tables
            .comments
            .iter()
            .filter(|c| c.game_id == game_id)
            .cloned()
            .collect())
    }

    async fn register_comment(&self, game_id: GameId, comment_id: CommentId) -> Result<bool> {
        let mut tables = self.inner.write().await;
        let Some(row) = tables.game_row_mut(game_id) else {
            return Ok(false);
        };
        if !row.comments.contains(&comment_id) {
            row.comments.push(comment_id);
        }
        Ok(true)
    }

    async fn set_comment_text(&self, id: CommentId, text: String) -> Result<Option<Comment>> {
        let mut tables = self.inner.write().await;
        let Some(comment) = tables.comments.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        comment.text = text;
        Ok(Some(comment.clone()))
    }

    async fn unregister_comment(&self, game_id: GameId, comment_id: CommentId) -> Result<bool> {
        let mut tables = self.inner.write().await;
        let Some(row) = tables.game_row_mut(game_id) else {
            return Ok(false);
        };
        row.comments.retain(|c| *c != comment_id);
        Ok(true)
    }

    async fn delete_comment(&self, id: CommentId) -> Result<bool> {
        let mut tables = self.inner.write().await;
        let before = tables.comments.len();
        tables.comments.retain(|c| c.id != id);
        Ok(tables.comments.len() != before)
    }

    async fn delete_comments_for_game(&self, game_id: GameId) -> Result<u64> {
        let mut tables = self.inner.write().await;
        let before = tables.comments.len();
        tables.comments.retain(|c| c.game_id != game_id);
        Ok((before - tables.comments.len()) as u64)
    }

    async fn insert_ticket(&self, ticket: Ticket) -> Result<()> {
        let mut tables = self.inner.write().await;
        tables.tickets.insert(ticket.id, ticket);
        Ok(())
    }

    async fn get_ticket(&self, id: TicketId) -> Result<Option<Ticket>> {
        let tables = self.inner.read().await;
        Ok(tables.tickets.get(&id).cloned())
    }

    async fn set_ticket_code(&self, id: TicketId, code: CodePayload) -> Result<bool> {
        let mut tables = self.inner.write().await;
        let Some(ticket) = tables.tickets.get_mut(&id) else {
            return Ok(false);
        };
        ticket.qrcode = Some(code);
        Ok(true)
    }

    async fn insert_user(&self, user: User) -> Result<()> {
        let mut tables = self.inner.write().await;
        tables.users.insert(
            user.id,
            UserRow {
                id: user.id,
                email: user.email,
                tickets: user.tickets,
            },
        );
        Ok(())
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        let tables = self.inner.read().await;
        Ok(tables.users.get(&id).map(|row| tables.user_view(row)))
    }

    async fn register_ticket(&self, user_id: UserId, ticket_id: TicketId) -> Result<bool> {
        let mut tables = self.inner.write().await;
        let Some(row) = tables.users.get_mut(&user_id) else {
            return Ok(false);
        };
        if !row.tickets.contains(&ticket_id) {
            row.tickets.push(ticket_id);
        }
        Ok(true)
    }
}
