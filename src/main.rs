use std::process::ExitCode;

use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    auth::admin::{SeedOutcome, seed},
    config::Config,
    errors::AppError,
};

mod auth;
mod config;
mod errors;
mod models;
mod repositories;

async fn run(config: Config) -> Result<SeedOutcome, AppError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    sqlx::migrate!().run(&pool).await?;
    let outcome = seed(&pool).await;
    pool.close().await;
    outcome
}

fn exit_status(result: &Result<SeedOutcome, AppError>) -> u8 {
    match result {
        Ok(outcome) => {
            tracing::info!("seed finished: {:?}", outcome);
            0
        }
        Err(e) => {
            tracing::error!(code = %e.code(), "seed failed: {}", e);
            1
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "admin_seed=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
    let result = match Config::from_env() {
        Ok(config) => run(config).await,
        Err(e) => Err(e),
    };
    ExitCode::from(exit_status(&result))
}
