//! Finstat Data
//!
//! Turns the quote provider's daily time-series envelope into a validated
//! [`finstat_types::Series`]. Retrieval over HTTP is left to the caller.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]

/// Provider envelope decoding.
pub mod envelope;
/// Data-layer error types.
pub mod error;
/// Saved envelope loading and path resolution.
pub mod loader;

/// Re-export: decode a daily envelope from JSON text.
pub use envelope::decode_daily_envelope;
/// Re-export: decode an already parsed daily envelope.
pub use envelope::decode_daily_value;
/// Re-export: data-layer error type.
pub use error::DataError;
/// Re-export: read and decode a saved envelope.
pub use loader::load_daily_envelope;
/// Re-export: resolve the default path of a saved envelope.
pub use loader::resolve_data_path;
