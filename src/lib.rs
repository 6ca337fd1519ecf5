#[cfg(test)]
#[macro_use]
extern crate assert_float_eq;

pub mod analysis;
pub mod barcode;
pub mod benchmarks;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod records;
pub mod scoring;
pub mod source;

pub use error::{AnalystError, Result};
pub use models::{Band, NutritionFacts, ProductAnalysis, ScoreResult};
