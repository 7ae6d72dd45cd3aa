//! Rating behavior: per-user uniqueness and average maintenance.

#![allow(clippy::unwrap_used)] // Test code

use gamepark_core::mocks::{RecordingNotifier, StaticEncoder};
use gamepark_core::{
    CatalogConfig, CatalogEngine, CatalogStore, CatalogError, InMemoryStore, NotificationWorker,
    Rating, Score, UserId, rating_mean,
};
use gamepark_testing::fixtures;
use proptest::prelude::*;

fn engine(store: InMemoryStore) -> CatalogEngine<InMemoryStore, StaticEncoder> {
    let (sender, _worker) = NotificationWorker::new(RecordingNotifier::new());
    CatalogEngine::new(store, StaticEncoder::default(), sender, CatalogConfig::default())
}

fn score(value: u8) -> Score {
    Score::new(value).unwrap()
}

#[tokio::test]
async fn test_average_reflects_all_ratings() {
    let store = InMemoryStore::new();
    let game_id = fixtures::seed_game(&store, "Space Mountain", 40.0)
        .await
        .unwrap();
    let engine = engine(store.clone());

    let first = engine.rate_game(UserId::new(), game_id, score(4)).await.unwrap();
    assert_eq!(first, 4.0);

    let second = engine.rate_game(UserId::new(), game_id, score(2)).await.unwrap();
    assert_eq!(second, 3.0);

    let game = store.get_game(game_id).await.unwrap().unwrap();
    assert_eq!(game.rating_average, 3.0);
    assert_eq!(game.ratings.len(), 2);
}

#[tokio::test]
async fn test_second_rating_from_same_user_is_rejected() {
    let store = InMemoryStore::new();
    let game_id = fixtures::seed_game(&store, "Matterhorn", 25.0).await.unwrap();
    let engine = engine(store.clone());
    let user = UserId::new();

    engine.rate_game(user, game_id, score(5)).await.unwrap();
    let error = engine.rate_game(user, game_id, score(1)).await.unwrap_err();
    assert_eq!(
        error,
        CatalogError::DuplicateRating {
            game_id,
            user_id: user
        }
    );

    // The rejected rating must not have touched the game.
    let game = store.get_game(game_id).await.unwrap().unwrap();
    assert_eq!(game.ratings.len(), 1);
    assert_eq!(game.rating_average, 5.0);
}

#[tokio::test]
async fn test_concurrent_ratings_never_leave_a_stale_average() {
    let store = InMemoryStore::new();
    let game_id = fixtures::seed_game(&store, "Thunder Rapids", 35.0)
        .await
        .unwrap();
    let engine = engine(store.clone());

    // Two users racing; whichever write lands second must not publish an
    // average that misses the other user's rating.
    let first = engine.rate_game(UserId::new(), game_id, score(4));
    let second = engine.rate_game(UserId::new(), game_id, score(2));
    let (first, second) = tokio::join!(first, second);
    first.unwrap();
    second.unwrap();

    let game = store.get_game(game_id).await.unwrap().unwrap();
    assert_eq!(game.ratings.len(), 2);
    assert_eq!(game.rating_average, rating_mean(&game.ratings));
    assert_eq!(game.rating_average, 3.0);
}

#[tokio::test]
async fn test_rating_unknown_game_is_not_found() {
    let engine = engine(InMemoryStore::new());
    let error = engine
        .rate_game(UserId::new(), gamepark_core::GameId::new(), score(3))
        .await
        .unwrap_err();
    assert!(error.is_not_found());
}

proptest! {
    #[test]
    fn test_mean_stays_in_score_range(values in proptest::collection::vec(0u8..=5, 0..64)) {
        let ratings: Vec<Rating> = values
            .iter()
            .map(|v| Rating { user_id: UserId::new(), value: Score::new(*v).unwrap() })
            .collect();
        let mean = rating_mean(&ratings);
        prop_assert!((0.0..=5.0).contains(&mean));
    }

    #[test]
    fn test_mean_of_identical_scores_is_that_score(value in 0u8..=5, count in 1usize..32) {
        let ratings: Vec<Rating> = (0..count)
            .map(|_| Rating { user_id: UserId::new(), value: Score::new(value).unwrap() })
            .collect();
        prop_assert_eq!(rating_mean(&ratings), f64::from(value));
    }
}
