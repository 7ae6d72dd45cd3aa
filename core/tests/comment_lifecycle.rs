//! Comment creation, ownership rules and game-deletion cascade.

#![allow(clippy::unwrap_used)] // Test code

use gamepark_core::mocks::{RecordingNotifier, StaticEncoder};
use gamepark_core::{
    CatalogConfig, CatalogEngine, CatalogError, CatalogStore, CommentId, GameId, InMemoryStore,
    NotificationWorker, Role, UserId,
};
use gamepark_testing::fixtures;
use gamepark_testing::mocks::test_clock;
use std::sync::Arc;

fn engine(store: InMemoryStore) -> CatalogEngine<InMemoryStore, StaticEncoder> {
    let (sender, _worker) = NotificationWorker::new(RecordingNotifier::new());
    CatalogEngine::new(store, StaticEncoder::default(), sender, CatalogConfig::default())
        .with_clock(Arc::new(test_clock()))
}

#[tokio::test]
async fn test_comment_is_registered_on_its_game() {
    let store = InMemoryStore::new();
    let game_id = fixtures::seed_game(&store, "Splash", 30.0).await.unwrap();
    let engine = engine(store.clone());
    let author = UserId::new();

    let comment = engine
        .add_comment(author, game_id, "Got soaked, would ride again")
        .await
        .unwrap();

    let game = store.get_game(game_id).await.unwrap().unwrap();
    assert_eq!(game.comments, vec![comment.id]);

    let listed = engine.list_comments(game_id).await.unwrap();
    assert_eq!(listed, vec![comment]);
}

#[tokio::test]
async fn test_comment_on_unknown_game_leaves_no_orphan() {
    let store = InMemoryStore::new();
    let engine = engine(store.clone());
    let missing = GameId::new();

    let error = engine
        .add_comment(UserId::new(), missing, "shouting into the void")
        .await
        .unwrap_err();
    assert_eq!(error, CatalogError::GameNotFound(missing));
    assert!(store.comments_for_game(missing).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_only_the_owner_may_edit() {
    let store = InMemoryStore::new();
    let game_id = fixtures::seed_game(&store, "Haunted Manor", 20.0).await.unwrap();
    let engine = engine(store);
    let owner = UserId::new();

    let comment = engine.add_comment(owner, game_id, "spooky").await.unwrap();

    let error = engine
        .edit_comment(UserId::new(), game_id, comment.id, "hijacked")
        .await
        .unwrap_err();
    assert_eq!(error, CatalogError::Forbidden);

    let edited = engine
        .edit_comment(owner, game_id, comment.id, "very spooky")
        .await
        .unwrap();
    assert_eq!(edited.text, "very spooky");
    assert_eq!(edited.owner, owner);
    assert_eq!(edited.created_at, comment.created_at);
}

#[tokio::test]
async fn test_editing_a_missing_comment_is_not_found() {
    let store = InMemoryStore::new();
    let game_id = fixtures::seed_game(&store, "Wave Pool", 9.0).await.unwrap();
    let engine = engine(store);
    let missing = CommentId::new();
    let error = engine
        .edit_comment(UserId::new(), game_id, missing, "anything")
        .await
        .unwrap_err();
    assert_eq!(error, CatalogError::CommentNotFound(missing));
}

#[tokio::test]
async fn test_stale_game_reference_beats_comment_lookup() {
    let store = InMemoryStore::new();
    let game_id = fixtures::seed_game(&store, "Wild Mouse", 14.0).await.unwrap();
    let engine = engine(store);
    let owner = UserId::new();

    let comment = engine.add_comment(owner, game_id, "rattly").await.unwrap();
    engine.delete_game(Role::Admin, game_id).await.unwrap();

    // The game is checked first, so the stale reference wins even though
    // the comment ID was once valid.
    let error = engine
        .edit_comment(owner, game_id, comment.id, "still rattly")
        .await
        .unwrap_err();
    assert_eq!(error, CatalogError::GameNotFound(game_id));

    let error = engine
        .delete_comment(owner, Role::Standard, game_id, comment.id)
        .await
        .unwrap_err();
    assert_eq!(error, CatalogError::GameNotFound(game_id));
}

#[tokio::test]
async fn test_comment_must_belong_to_the_named_game() {
    let store = InMemoryStore::new();
    let first_game = fixtures::seed_game(&store, "Go Karts", 18.0).await.unwrap();
    let other_game = fixtures::seed_game(&store, "Mini Golf", 11.0).await.unwrap();
    let engine = engine(store);
    let owner = UserId::new();

    let comment = engine.add_comment(owner, first_game, "fast").await.unwrap();

    let error = engine
        .edit_comment(owner, other_game, comment.id, "slow")
        .await
        .unwrap_err();
    assert_eq!(error, CatalogError::CommentNotFound(comment.id));
}

#[tokio::test]
async fn test_delete_requires_owner_or_admin() {
    let store = InMemoryStore::new();
    let game_id = fixtures::seed_game(&store, "Drop Tower", 15.0).await.unwrap();
    let engine = engine(store.clone());
    let owner = UserId::new();

    let comment = engine.add_comment(owner, game_id, "too tall").await.unwrap();

    let error = engine
        .delete_comment(UserId::new(), Role::Standard, game_id, comment.id)
        .await
        .unwrap_err();
    assert_eq!(error, CatalogError::Forbidden);

    // An admin who is not the owner may delete.
    engine
        .delete_comment(UserId::new(), Role::Admin, game_id, comment.id)
        .await
        .unwrap();
    assert!(store.get_comment(comment.id).await.unwrap().is_none());
    let game = store.get_game(game_id).await.unwrap().unwrap();
    assert!(game.comments.is_empty());
}

#[tokio::test]
async fn test_owner_can_delete_without_admin_role() {
    let store = InMemoryStore::new();
    let game_id = fixtures::seed_game(&store, "Log Flume", 12.0).await.unwrap();
    let engine = engine(store);
    let owner = UserId::new();

    let comment = engine.add_comment(owner, game_id, "wet").await.unwrap();
    engine
        .delete_comment(owner, Role::Standard, game_id, comment.id)
        .await
        .unwrap();

    let remaining = engine.list_comments(game_id).await.unwrap();
    assert!(remaining.is_empty());
}

#[tokio::test]
async fn test_game_deletion_cascades_comments() {
    let store = InMemoryStore::new();
    let game_id = fixtures::seed_game(&store, "Ferris Wheel", 8.0).await.unwrap();
    let engine = engine(store.clone());

    let first = engine.add_comment(UserId::new(), game_id, "slow").await.unwrap();
    let second = engine.add_comment(UserId::new(), game_id, "great view").await.unwrap();

    engine.delete_game(Role::Admin, game_id).await.unwrap();

    assert!(store.get_game(game_id).await.unwrap().is_none());
    assert!(store.get_comment(first.id).await.unwrap().is_none());
    assert!(store.get_comment(second.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_catalog_mutations_require_admin() {
    let store = InMemoryStore::new();
    let game_id = fixtures::seed_game(&store, "Bumper Cars", 6.0).await.unwrap();
    let engine = engine(store);

    let error = engine.delete_game(Role::Standard, game_id).await.unwrap_err();
    assert_eq!(error, CatalogError::Forbidden);

    let error = engine
        .update_game(
            Role::Standard,
            game_id,
            gamepark_core::GameDraft {
                name: "Bumper Cars II".to_string(),
                image: "https://img.example/b2.png".to_string(),
                price: 7.0,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(error, CatalogError::Forbidden);
}
