use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound for any per-100g mass field.
pub const MAX_GRAMS_PER_100G: f64 = 100.0;

/// 100 g of pure salt carries 40 g of sodium.
pub const MAX_SODIUM_MG_PER_100G: f64 = 40_000.0;

/// Pure fat is ~900 kcal/100g; the margin absorbs label rounding.
pub const MAX_ENERGY_KCAL_PER_100G: f64 = 1_000.0;

/// Milligrams of sodium per gram of salt.
pub const SODIUM_MG_PER_SALT_G: f64 = 400.0;

/// The nutrients tracked per 100 g of product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    Energy,
    Fat,
    SaturatedFat,
    Carbohydrates,
    Sugar,
    Fiber,
    Protein,
    Salt,
    Sodium,
}

impl Nutrient {
    pub const ALL: [Nutrient; 9] = [
        Nutrient::Energy,
        Nutrient::Fat,
        Nutrient::SaturatedFat,
        Nutrient::Carbohydrates,
        Nutrient::Sugar,
        Nutrient::Fiber,
        Nutrient::Protein,
        Nutrient::Salt,
        Nutrient::Sodium,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Nutrient::Energy => "Energy",
            Nutrient::Fat => "Fat",
            Nutrient::SaturatedFat => "Saturated Fat",
            Nutrient::Carbohydrates => "Carbohydrates",
            Nutrient::Sugar => "Sugars",
            Nutrient::Fiber => "Fiber",
            Nutrient::Protein => "Protein",
            Nutrient::Salt => "Salt",
            Nutrient::Sodium => "Sodium",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Nutrient::Energy => "kcal",
            Nutrient::Sodium => "mg",
            _ => "g",
        }
    }

    /// Largest value that can physically occur per 100 g.
    pub fn plausible_max(&self) -> f64 {
        match self {
            Nutrient::Energy => MAX_ENERGY_KCAL_PER_100G,
            Nutrient::Sodium => MAX_SODIUM_MG_PER_100G,
            _ => MAX_GRAMS_PER_100G,
        }
    }

    /// Whether `value` is an acceptable per-100g quantity for this nutrient.
    pub fn accepts(&self, value: f64) -> bool {
        value.is_finite() && value >= 0.0 && value <= self.plausible_max()
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Nutrition facts per 100 g of product.
///
/// `None` means the value is unknown. It is never treated as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub energy_kcal: Option<f64>,
    pub fat_g: Option<f64>,
    pub saturated_fat_g: Option<f64>,
    pub carbohydrates_g: Option<f64>,
    pub sugar_g: Option<f64>,
    pub fiber_g: Option<f64>,
    pub protein_g: Option<f64>,
    pub salt_g: Option<f64>,
    pub sodium_mg: Option<f64>,
}

impl NutritionFacts {
    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Energy => self.energy_kcal,
            Nutrient::Fat => self.fat_g,
            Nutrient::SaturatedFat => self.saturated_fat_g,
            Nutrient::Carbohydrates => self.carbohydrates_g,
            Nutrient::Sugar => self.sugar_g,
            Nutrient::Fiber => self.fiber_g,
            Nutrient::Protein => self.protein_g,
            Nutrient::Salt => self.salt_g,
            Nutrient::Sodium => self.sodium_mg,
        }
    }

    /// Builder-style setter, handy for fixtures.
    pub fn with(mut self, nutrient: Nutrient, value: f64) -> Self {
        let slot = match nutrient {
            Nutrient::Energy => &mut self.energy_kcal,
            Nutrient::Fat => &mut self.fat_g,
            Nutrient::SaturatedFat => &mut self.saturated_fat_g,
            Nutrient::Carbohydrates => &mut self.carbohydrates_g,
            Nutrient::Sugar => &mut self.sugar_g,
            Nutrient::Fiber => &mut self.fiber_g,
            Nutrient::Protein => &mut self.protein_g,
            Nutrient::Salt => &mut self.salt_g,
            Nutrient::Sodium => &mut self.sodium_mg,
        };
        *slot = Some(value);
        self
    }

    /// True when no nutrient value is known.
    pub fn is_empty(&self) -> bool {
        Nutrient::ALL.iter().all(|n| self.get(*n).is_none())
    }

    /// Present fields that are negative, non-finite or above the per-100g maximum.
    pub fn out_of_range(&self) -> Vec<(Nutrient, f64)> {
        Nutrient::ALL
            .iter()
            .filter_map(|n| self.get(*n).map(|v| (*n, v)))
            .filter(|(n, v)| !n.accepts(*v))
            .collect()
    }
}
