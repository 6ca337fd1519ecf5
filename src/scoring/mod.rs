pub mod engine;
pub mod explanation;

pub use engine::{BASE_SCORE, MAX_SCORE, MIN_SCORE, score};
pub use explanation::{MAX_EXPLAINED_FACTORS, compose_explanation, dominant_factors};
