// Logging initialization

use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Installs a stderr fmt subscriber. `RUST_LOG` takes precedence over
/// `level`; calling this twice returns an error instead of panicking.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing::debug!("Logging initialized at {}", level);
    Ok(())
}
