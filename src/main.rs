use anyhow::Result;
use ollama_generate::{config, generate};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

/// Picks the log filter: a parseable `RUST_LOG` directive wins, otherwise the
/// configured level, which must be a bare level name.
fn resolve_log_filter(rust_log: Option<&str>, config_level: &str) -> Result<EnvFilter> {
    if let Some(filter) = rust_log.and_then(|directive| EnvFilter::try_new(directive).ok()) {
        return Ok(filter);
    }

    validate_log_level(config_level)?;
    Ok(EnvFilter::try_new(config_level)?)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = match resolve_log_filter(rust_log.as_deref(), &config.logs.level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    // stdout is reserved for the generated text
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!("Configuration loaded successfully");

    generate::run(config).await?;

    Ok(())
}
