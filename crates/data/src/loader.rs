use std::path::{Path, PathBuf};

use finstat_types::Series;

use crate::envelope::decode_daily_envelope;
use crate::error::DataError;

/// Environment variable overriding the root directory of saved envelopes.
pub const DATA_ROOT_ENV: &str = "FINSTAT_DATA_ROOT";
const DEFAULT_DATA_ROOT: &str = "data/raw";

/// Resolve a saved envelope path using the canonical layout or an env override.
///
/// Layout: `<root>/<SYMBOL>/<SYMBOL>_daily.json`.
#[must_use]
pub fn resolve_data_path(symbol: &str) -> PathBuf {
    let root = std::env::var(DATA_ROOT_ENV).unwrap_or_else(|_| DEFAULT_DATA_ROOT.to_string());

    PathBuf::from(root)
        .join(symbol)
        .join(format!("{symbol}_daily.json"))
}

/// Reads a saved daily envelope from disk and decodes it.
///
/// # Errors
/// - [`DataError::FileNotFound`] when the file cannot be read.
/// - Any decoding error from [`decode_daily_envelope`].
pub fn load_daily_envelope(path: &Path) -> Result<Series, DataError> {
    let payload = std::fs::read_to_string(path)
        .map_err(|e| DataError::FileNotFound(path.display().to_string(), e.to_string()))?;

    tracing::debug!("loaded envelope {} ({} bytes)", path.display(), payload.len());
    decode_daily_envelope(&payload)
}
