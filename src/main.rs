//! Bookshelf - interactive library inventory console

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookshelf::{
    config::{AppConfig, LoggingConfig},
    console::Console,
    repository::FileStore,
    services::Catalog,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    tracing::info!("Starting Bookshelf v{}", env!("CARGO_PKG_VERSION"));

    let store = FileStore::new(&config.library.data_file);
    let mut catalog = Catalog::new();

    // A corrupt data file aborts startup rather than risk overwriting it on exit
    let report = catalog
        .load(&store)
        .with_context(|| format!("Failed to load library from {}", store.path().display()))?;
    println!("{}", report);

    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());
    console
        .run(&mut catalog, &store)
        .with_context(|| format!("Console session failed for {}", store.path().display()))?;

    Ok(())
}

/// Logs go to stderr so they never interleave with the menu on stdout
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("bookshelf={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
