mod fixture;
mod openfoodfacts;

use serde_json::Value;

use crate::error::Result;

pub use fixture::{FixtureSource, load_response};
pub use openfoodfacts::OpenFoodFactsClient;

/// Where raw product documents come from.
///
/// The record builder only sees the returned JSON, so HTTP, saved files
/// and test fixtures are interchangeable.
pub trait ProductSource {
    fn fetch(&self, barcode: &str) -> Result<Value>;
}
