use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{AnalystError, Result};
use crate::models::{Nutrient, NutritionFacts, ProductInfo, SODIUM_MG_PER_SALT_G};

/// OpenFoodFacts `status` value for a found product.
const STATUS_FOUND: i64 = 1;

/// OpenFoodFacts reports sodium in grams.
const SODIUM_G_TO_MG: f64 = 1000.0;

/// Per-100g nutriment keys in the OpenFoodFacts product document.
pub fn nutriment_key(nutrient: Nutrient) -> &'static str {
    match nutrient {
        Nutrient::Energy => "energy-kcal_100g",
        Nutrient::Fat => "fat_100g",
        Nutrient::SaturatedFat => "saturated-fat_100g",
        Nutrient::Carbohydrates => "carbohydrates_100g",
        Nutrient::Sugar => "sugars_100g",
        Nutrient::Fiber => "fiber_100g",
        Nutrient::Protein => "proteins_100g",
        Nutrient::Salt => "salt_100g",
        Nutrient::Sodium => "sodium_100g",
    }
}

/// Normalize a raw product response into a nutrition record.
pub fn build(raw: &Value) -> Result<NutritionFacts> {
    let product = found_product(raw)?;
    facts_from_product(product)
}

/// Normalize a raw product response into product metadata plus nutrition record.
pub fn build_analysis_input(raw: &Value, barcode: &str) -> Result<(ProductInfo, NutritionFacts)> {
    let product = found_product(raw)?;
    let facts = facts_from_product(product)?;
    Ok((product_info(product, barcode), facts))
}

/// Check the found flag and return the product object.
fn found_product(raw: &Value) -> Result<&Map<String, Value>> {
    let root = raw
        .as_object()
        .ok_or_else(|| AnalystError::MalformedData("response is not a JSON object".to_string()))?;

    let status = root
        .get("status")
        .and_then(Value::as_i64)
        .ok_or_else(|| AnalystError::MalformedData("missing or non-integer 'status'".to_string()))?;

    if status != STATUS_FOUND {
        let code = root
            .get("code")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string();
        return Err(AnalystError::MissingProduct(code));
    }

    root.get("product")
        .and_then(Value::as_object)
        .ok_or_else(|| AnalystError::MalformedData("missing 'product' object".to_string()))
}

fn facts_from_product(product: &Map<String, Value>) -> Result<NutritionFacts> {
    let nutriments = match product.get("nutriments") {
        None | Some(Value::Null) => {
            debug!("product has no nutriments; all values unknown");
            return Ok(NutritionFacts::default());
        }
        Some(Value::Object(map)) => map,
        Some(other) => {
            return Err(AnalystError::MalformedData(format!(
                "'nutriments' is not an object: {}",
                other
            )));
        }
    };

    let read = |nutrient: Nutrient| -> Option<f64> {
        let key = nutriment_key(nutrient);
        let raw = nutriments.get(key)?;
        let Some(mut value) = coerce_number(raw) else {
            debug!(key, %raw, "non-numeric nutriment left unset");
            return None;
        };
        if nutrient == Nutrient::Sodium {
            value *= SODIUM_G_TO_MG;
        }
        if nutrient.accepts(value) {
            Some(value)
        } else {
            warn!(key, value, "implausible nutriment value left unset");
            None
        }
    };

    let salt_g = read(Nutrient::Salt);
    let sodium_mg = read(Nutrient::Sodium).or_else(|| {
        salt_g
            .map(|salt| salt * SODIUM_MG_PER_SALT_G)
            .filter(|mg| Nutrient::Sodium.accepts(*mg))
    });

    Ok(NutritionFacts {
        energy_kcal: read(Nutrient::Energy),
        fat_g: read(Nutrient::Fat),
        saturated_fat_g: read(Nutrient::SaturatedFat),
        carbohydrates_g: read(Nutrient::Carbohydrates),
        sugar_g: read(Nutrient::Sugar),
        fiber_g: read(Nutrient::Fiber),
        protein_g: read(Nutrient::Protein),
        salt_g,
        sodium_mg,
    })
}

/// Numbers pass through; strings are trimmed and parsed, accepting a decimal comma.
pub fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<f64>()
                .or_else(|_| s.replace(',', ".").parse::<f64>())
                .ok()
        }
        _ => None,
    };
    number.filter(|v| v.is_finite())
}

fn product_info(product: &Map<String, Value>, barcode: &str) -> ProductInfo {
    let text = |key: &str| -> Option<String> {
        product
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    let fallback = ProductInfo::unknown(barcode);
    let nova_group = product
        .get("nova_group")
        .and_then(coerce_number)
        .filter(|g| (1.0..=4.0).contains(g) && g.fract() == 0.0)
        .map(|g| g as u8);

    ProductInfo {
        barcode: barcode.to_string(),
        name: text("product_name").unwrap_or(fallback.name),
        brand: text("brands").unwrap_or(fallback.brand),
        categories: text("categories").unwrap_or(fallback.categories),
        ingredients: text("ingredients_text").unwrap_or(fallback.ingredients),
        nutriscore_grade: text("nutriscore_grade")
            .map(|g| g.to_ascii_lowercase())
            .filter(|g| matches!(g.as_str(), "a" | "b" | "c" | "d" | "e")),
        nova_group,
        image_url: text("image_url"),
    }
}
