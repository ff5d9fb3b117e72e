//! Finstat Analysis
//!
//! Inferential statistics over an augmented daily series: summary statistics
//! and a normality and location test on daily returns, a unit-root test,
//! a seasonal decomposition and a correlogram on close prices.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
// Observation counts never exceed f64 mantissa precision
#![allow(clippy::cast_precision_loss)]

/// StatisticalAnalyzer entrypoint.
pub mod analyzer;
/// ACF and PACF.
pub mod correlogram;
/// Multiplicative seasonal decomposition.
pub mod decomposition;
/// Summary statistics.
pub mod descriptive;
/// Analysis error types.
pub mod error;
/// One-sample t-test.
pub mod location;
/// Shapiro-Wilk normality test.
pub mod normality;
/// Report and verdict types.
pub mod report;
/// Augmented Dickey-Fuller test.
pub mod stationarity;

pub use analyzer::StatisticalAnalyzer;
pub use correlogram::{acf, correlogram, pacf_yule_walker};
pub use decomposition::seasonal_decompose;
pub use descriptive::{DescriptiveStats, describe};
pub use error::AnalysisError;
pub use location::one_sample_t_test;
pub use normality::shapiro_wilk;
pub use report::{
    AnalysisReport, Correlogram, CriticalValues, Decomposition, LocationTest, LocationVerdict,
    NormalityTest, NormalityVerdict, ProcedureFailure, ProcedureOutcome, SIGNIFICANCE_LEVEL,
    StationarityTest, StationarityVerdict,
};
pub use stationarity::adf_test;
