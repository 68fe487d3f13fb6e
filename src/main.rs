//! Employee API - CRUD web service for employee records.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use employee_api as app;

use app::api::{self, AppState};
use app::config::{AppConfig, ConfigLoadResult};
use app::db;

/// CRUD web service for employees, addresses, cities, countries, job categories and salaries.
#[derive(Parser)]
#[command(name = "employee-api")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Explicit config file path
    #[arg(long, value_name = "PATH", conflicts_with = "dev")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Determine config path based on mode
    let config_path = match (cli.config, cli.dev) {
        (Some(path), _) => path,
        (None, true) => PathBuf::from("config.toml"),
        (None, false) => AppConfig::default_path(),
    };

    let (config, load_note) = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => (config, "Config loaded successfully"),
        ConfigLoadResult::Missing => {
            let config = AppConfig::default();
            config
                .save(&config_path)
                .with_context(|| format!("writing default config to {}", config_path.display()))?;
            (config, "Config missing, wrote defaults")
        }
        ConfigLoadResult::Invalid(e) => {
            return Err(e).with_context(|| format!("invalid config at {}", config_path.display()));
        }
    };

    // Initialize logging
    let _log_guard = app::logging::init(&config.logging);

    tracing::info!("Employee API starting...");
    tracing::info!("Config path: {:?}", config_path);
    tracing::info!("{}", load_note);

    let pool = db::connect(&config.database)
        .await
        .context("Failed to connect to database")?;

    if config.database.create_schema {
        db::create_tables(&pool).await.context("Failed to create tables")?;
    }

    // Log connection info
    if let Ok(version) = db::get_version(&pool).await {
        tracing::info!("Database: {}", version);
    }

    if let Ok(counts) = db::get_table_counts(&pool).await {
        tracing::info!(
            "Tables: {} employees, {} addresses, {} cities, {} countries, {} salaries, {} job categories",
            counts.employees,
            counts.addresses,
            counts.cities,
            counts.countries,
            counts.salaries,
            counts.job_categories
        );
    }

    let app = api::router(AppState::new(pool));
    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    tracing::info!("Listening on http://{}", address);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Employee API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}
