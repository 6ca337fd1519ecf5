use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::analyze_product;
use crate::error::Result;
use crate::models::ProductAnalysis;
use crate::source::ProductSource;

#[derive(Debug, Deserialize)]
struct BatchInput {
    barcode: String,
}

/// One line of the batch CSV report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub barcode: String,
    pub product_name: Option<String>,
    pub brand: Option<String>,
    pub score: Option<u8>,
    pub band: Option<String>,
    pub nutriscore: Option<String>,
    pub good_points: Option<usize>,
    pub concerns: Option<usize>,
    pub error: Option<String>,
}

impl ReportRow {
    pub fn from_outcome(barcode: &str, outcome: &Result<ProductAnalysis>) -> Self {
        match outcome {
            Ok(analysis) => Self {
                barcode: analysis.product.barcode.clone(),
                product_name: Some(analysis.product.name.clone()),
                brand: Some(analysis.product.brand.clone()),
                score: Some(analysis.score.score),
                band: Some(analysis.score.band.to_string()),
                nutriscore: analysis.product.nutriscore_grade.clone(),
                good_points: Some(analysis.score.good_points.len()),
                concerns: Some(analysis.score.concerns.len()),
                error: None,
            },
            Err(e) => Self {
                barcode: barcode.trim().to_string(),
                product_name: None,
                brand: None,
                score: None,
                band: None,
                nutriscore: None,
                good_points: None,
                concerns: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Read barcodes from the `barcode` column of a CSV file.
pub fn read_barcodes<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut barcodes = Vec::new();
    for row in rdr.deserialize() {
        let row: BatchInput = row?;
        let code = row.barcode.trim();
        if !code.is_empty() {
            barcodes.push(code.to_string());
        }
    }
    Ok(barcodes)
}

/// Analyze every barcode; failures become report rows instead of aborting.
pub fn build_report<S: ProductSource + ?Sized>(source: &S, barcodes: &[String]) -> Vec<ReportRow> {
    barcodes
        .iter()
        .map(|code| {
            let outcome = analyze_product(source, code);
            if let Err(e) = &outcome {
                warn!(barcode = %code, error = %e, "batch entry failed");
            }
            ReportRow::from_outcome(code, &outcome)
        })
        .collect()
}

/// Write report rows to a CSV file.
pub fn write_report<P: AsRef<Path>>(rows: &[ReportRow], path: P) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
