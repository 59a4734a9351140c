use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Filter directive for a verbosity level. `RUST_LOG` takes precedence when set.
fn default_directive(level: log::Level) -> String {
    level.as_str().to_ascii_lowercase()
}

/// Sends `log` records to `path`, since the terminal itself belongs to the game.
pub fn init(path: &Path, level: Option<log::Level>) -> Result<()> {
    let Some(level) = level else {
        return Ok(());
    };

    let log_file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive(level))),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install logger: {err}"))?;

    log::info!("logging to {} at {level}", path.display());
    Ok(())
}
