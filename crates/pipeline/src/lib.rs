//! Finstat Pipeline
//!
//! Config-driven orchestration: load a saved provider envelope, compute the
//! indicator columns, run the statistical analyzer and emit a JSON result.
//!
//! # Entry Points
//!
//! - [`run_pipeline_from_json`]: config JSON in, result JSON out, every failure as `Err`
//! - [`execute`]: same, but non-config failures become an `ok: false` result
//! - [`run_pipeline`]: in-memory run over an already loaded series

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]

/// Pipeline configuration.
pub mod config;
/// Pipeline error types and output-contract categories.
pub mod error;
/// Result envelope.
pub mod result;
/// Runner entry points.
pub mod runner;

pub use config::{LoggingConfig, PipelineConfig};
pub use error::{ErrorResult, PipelineError};
pub use result::{PipelineResult, ResultMeta};
pub use runner::{execute, run_pipeline, run_pipeline_from_json};
