//! # Gamepark Testing
//!
//! Testing utilities and fixtures for the Gamepark catalog engine.
//!
//! This crate provides:
//! - A deterministic clock
//! - Fixture helpers that seed stores with games and users
//!
//! ## Example
//!
//! ```ignore
//! use gamepark_core::InMemoryStore;
//! use gamepark_testing::{fixtures, mocks::test_clock};
//!
//! #[tokio::test]
//! async fn test_rating_flow() {
//!     let store = InMemoryStore::new();
//!     let game_id = fixtures::seed_game(&store, "Space Mountain", 40.0).await.unwrap();
//!     // ... drive an engine against the seeded store
//! }
//! ```

/// Mock implementations for deterministic tests.
pub mod mocks {
    use chrono::{DateTime, Utc};
    use gamepark_core::Clock;

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2026-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2026-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

/// Fixture helpers that seed a store with well-known records.
pub mod fixtures {
    use gamepark_core::{CatalogStore, Game, GameId, Result, User, UserId};

    /// Insert a game with the given name and price; returns its ID.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn seed_game(
        store: &impl CatalogStore,
        name: &str,
        price: f64,
    ) -> Result<GameId> {
        let game = Game::new(name, format!("https://img.example/{name}.png"), price);
        let id = game.id;
        store.insert_game(game).await?;
        Ok(id)
    }

    /// Insert a user with the given email; returns their ID.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn seed_user(store: &impl CatalogStore, email: &str) -> Result<UserId> {
        let user = User::new(email);
        let id = user.id;
        store.insert_user(user).await?;
        Ok(id)
    }
}
