use serde::Serialize;

use crate::models::{NutritionFacts, ScoreResult};

/// Product metadata passed through from the nutrition database for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductInfo {
    pub barcode: String,
    pub name: String,
    pub brand: String,
    pub categories: String,
    pub ingredients: String,
    /// Externally computed Nutri-Score grade (a-e). Never derived here.
    pub nutriscore_grade: Option<String>,
    /// NOVA processing group (1-4), display only.
    pub nova_group: Option<u8>,
    pub image_url: Option<String>,
}

impl ProductInfo {
    pub fn unknown(barcode: &str) -> Self {
        Self {
            barcode: barcode.to_string(),
            name: "Unknown Product".to_string(),
            brand: "Unknown".to_string(),
            categories: "Unknown".to_string(),
            ingredients: "Not available".to_string(),
            nutriscore_grade: None,
            nova_group: None,
            image_url: None,
        }
    }
}

/// Everything the presentation layer needs for one scanned product.
#[derive(Debug, Clone, Serialize)]
pub struct ProductAnalysis {
    pub product: ProductInfo,
    pub nutrition: NutritionFacts,
    pub score: ScoreResult,
}
