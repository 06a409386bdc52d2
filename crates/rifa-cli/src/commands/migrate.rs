//! Run database migrations.

use clap::Args;

use rifa_core::error::AppError;
use rifa_database::connection::DatabasePool;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {}

/// Execute the migrate command
pub async fn execute(_args: &MigrateArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    if config.database.provider != "postgres" {
        return Err(AppError::configuration(format!(
            "Migrations only apply to the postgres provider, configured: {}",
            config.database.provider
        )));
    }

    let pool = DatabasePool::connect(&config.database).await?;
    rifa_database::migration::run_migrations(pool.pool()).await?;
    pool.close().await;

    println!("Migrations applied successfully.");
    Ok(())
}
