use serde_json::Value;
use tracing::info;

use crate::barcode::validate_barcode;
use crate::error::Result;
use crate::models::ProductAnalysis;
use crate::records::build_analysis_input;
use crate::scoring::score;
use crate::source::ProductSource;

/// Full pipeline: validate barcode, fetch, normalize, score.
pub fn analyze_product<S: ProductSource + ?Sized>(
    source: &S,
    barcode: &str,
) -> Result<ProductAnalysis> {
    let code = validate_barcode(barcode)?;
    let raw = source.fetch(&code)?;
    analyze_raw(&raw, &code)
}

/// Score an already loaded product document.
pub fn analyze_raw(raw: &Value, barcode: &str) -> Result<ProductAnalysis> {
    let (product, nutrition) = build_analysis_input(raw, barcode)?;
    let score = score(&nutrition)?;
    info!(
        barcode,
        product = %product.name,
        score = score.score,
        band = %score.band,
        "product analyzed"
    );
    Ok(ProductAnalysis {
        product,
        nutrition,
        score,
    })
}
