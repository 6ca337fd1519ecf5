mod nutrition;
mod product;
mod score;

pub use nutrition::{
    MAX_ENERGY_KCAL_PER_100G, MAX_GRAMS_PER_100G, MAX_SODIUM_MG_PER_100G, Nutrient,
    NutritionFacts, SODIUM_MG_PER_SALT_G,
};
pub use product::{ProductAnalysis, ProductInfo};
pub use score::{Band, ScoreFactor, ScoreResult, format_value};
