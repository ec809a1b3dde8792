// ABOUTME: Entry point for the voxpop binary.
// ABOUTME: Loads .env overrides, initializes tracing, and opens the history store.

use voxpop::config::{self, Settings};
use voxpop_store::{HistoryStore, SortField};

fn main() -> anyhow::Result<()> {
    config::load_env_file();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "voxpop=debug".parse().unwrap()),
        )
        .init();

    let settings = Settings::from_env();
    let store = HistoryStore::new(settings.history_dir)?;

    let records = store.get_all(SortField::CreatedAt, true);
    tracing::info!(
        "history store ready at {} ({} records)",
        store.dir().display(),
        records.len()
    );

    Ok(())
}
