//! End-to-end ticket issuance against the in-memory store.
//!
//! Run with: `cargo run -p gamepark-core --example issue_ticket`

use gamepark_core::{
    CatalogConfig, CatalogEngine, CatalogStore, ConsoleTicketNotifier, GameDraft, InMemoryStore,
    NotificationWorker, QrTicketEncoder, Role, Score, User,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let store = InMemoryStore::new();
    let (sender, worker) = NotificationWorker::new(ConsoleTicketNotifier::new());
    let worker_handle = worker.spawn();

    let engine = CatalogEngine::new(
        store.clone(),
        QrTicketEncoder::new(),
        sender,
        CatalogConfig::default(),
    );

    // Seed a buyer; in production these records come from the auth system.
    let buyer = User::new("guest@example.com");
    let buyer_id = buyer.id;
    store.insert_user(buyer).await?;

    let game = engine
        .create_game(
            Role::Admin,
            GameDraft {
                name: "Space Mountain".to_string(),
                image: "https://img.example/space-mountain.png".to_string(),
                price: 40.0,
            },
        )
        .await?;

    engine.toggle_like(buyer_id, game.id).await?;
    let average = engine
        .rate_game(buyer_id, game.id, Score::new(5).ok_or_else(|| anyhow::anyhow!("bad score"))?)
        .await?;
    println!("rated {} -> average {average}", game.name);

    let comment = engine
        .add_comment(buyer_id, game.id, "Best ride in the park")
        .await?;
    println!("commented: {}", comment.text);

    let issued = engine.issue_ticket(buyer_id, game.id, "2026-09-12").await?;
    println!(
        "issued ticket {} ({} byte payload)",
        issued.ticket.id,
        issued.qrcode.as_str().len()
    );

    // Dropping the engine releases the queue sender; awaiting the worker
    // flushes the pending notification.
    drop(engine);
    worker_handle.await?;

    Ok(())
}
