//! Wiring binary: settings, logging, database, engine, event intake.
//!
//! The CRUD surface of the tracker lives elsewhere; this binary stands in
//! for it by consuming already-validated new-transaction events from stdin,
//! one JSON object per line, and handing each one to the posting engine:
//!
//! ```text
//! {"description":"Grocery","amount":"90.00","date":"2026-08-30","account_type_id":5}
//! ```

use migration::{Migrator, MigratorTrait};
use tokio::io::AsyncBufReadExt;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "saldo={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let db = connect_database(&settings.database).await?;
    let engine = engine::Engine::builder()
        .database(db)
        .rules(settings.balance.rule_config())
        .build()
        .await?;

    tracing::info!("reading new-transaction events from stdin, one JSON object per line");

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event: engine::NewTransaction = match serde_json::from_str(line) {
            Ok(event) => event,
            Err(err) => {
                tracing::error!("malformed event: {err}");
                continue;
            }
        };

        match engine.record_transaction(&event).await {
            Ok(tx) => {
                tracing::info!(id = tx.id, amount = %tx.amount(), "recorded transaction");
            }
            Err(err) => tracing::error!("failed to record transaction: {err}"),
        }
    }

    Ok(())
}

async fn connect_database(
    config: &settings::Database,
) -> Result<sea_orm::DatabaseConnection, Box<dyn std::error::Error + Send + Sync>> {
    let url = match &config.path {
        Some(path) => format!("sqlite:{}?mode=rwc", path),
        None => String::from("sqlite::memory:"),
    };

    let database = sea_orm::Database::connect(url).await?;
    Migrator::up(&database, None).await?;
    Ok(database)
}
