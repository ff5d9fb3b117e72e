//! Finstat Types
//!
//! Core data structures shared by the finstat crates.
//! This crate provides daily bars, the validated [`Series`], the
//! undefined-aware [`Value`] and the [`AugmentedSeries`] produced by the
//! indicator engine.

#![deny(clippy::all)]

pub mod augmented;
pub mod bar;
pub mod columns;
pub mod error;
pub mod series;
pub mod value;

// Re-export main types for convenience
pub use augmented::{AugmentedSeries, TableRow};
pub use bar::Bar;
pub use error::SeriesError;
pub use series::{Series, validate_bars};
pub use value::{Value, defined_values};
