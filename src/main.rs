//! Rifa Server — raffle ticket sales backend
//!
//! Main entry point that wires all crates together and starts the server.

use tracing_subscriber::EnvFilter;

use rifa_core::config::AppConfig;
use rifa_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = rifa_api::app::bootstrap(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from the path in `RIFA_CONFIG`, falling back to
/// `config/default.toml`.
fn load_configuration() -> Result<AppConfig, AppError> {
    let path =
        std::env::var("RIFA_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());
    AppConfig::load(&path)
}

/// Initialize the tracing subscriber from the logging config.
fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
