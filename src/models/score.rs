use serde::Serialize;
use std::fmt;

use crate::models::Nutrient;

/// Letter grade derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Band {
    A,
    B,
    C,
    D,
    E,
}

impl Band {
    /// Fixed breakpoints: 80 / 60 / 40 / 20.
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => Band::A,
            60..=79 => Band::B,
            40..=59 => Band::C,
            20..=39 => Band::D,
            _ => Band::E,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Band::A => "excellent nutritional quality",
            Band::B => "good nutritional quality",
            Band::C => "acceptable nutritional quality",
            Band::D => "poor nutritional quality",
            Band::E => "very poor nutritional quality",
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Band::A => 'A',
            Band::B => 'B',
            Band::C => 'C',
            Band::D => 'D',
            Band::E => 'E',
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One benchmark rule that fired for a product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreFactor {
    pub nutrient: Nutrient,
    /// Human label, e.g. "High Sugar" or "Very High Fiber".
    pub label: &'static str,
    /// Observed per-100g value.
    pub value: f64,
    pub unit: &'static str,
    /// Threshold as shown to the user, e.g. ">22.5 g".
    pub threshold: String,
    /// Signed contribution to the score (negative for concerns).
    pub points: f64,
    /// Key into the citation table.
    pub citation: &'static str,
}

impl ScoreFactor {
    /// "High Sugar: 30 g per 100g"
    pub fn summary(&self) -> String {
        format!("{}: {} {} per 100g", self.label, format_value(self.value), self.unit)
    }
}

/// Result of scoring one product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: u8,
    pub band: Band,
    pub good_points: Vec<ScoreFactor>,
    pub concerns: Vec<ScoreFactor>,
    pub explanation: String,
    /// Citation ids backing the fired rules, de-duplicated, in table order.
    pub citations: Vec<&'static str>,
}

/// Drop trailing zeros so 23.0 prints as "23" and 0.25 as "0.25".
pub fn format_value(value: f64) -> String {
    let s = format!("{:.2}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_breakpoints() {
        assert_eq!(Band::from_score(100), Band::A);
        assert_eq!(Band::from_score(80), Band::A);
        assert_eq!(Band::from_score(79), Band::B);
        assert_eq!(Band::from_score(60), Band::B);
        assert_eq!(Band::from_score(59), Band::C);
        assert_eq!(Band::from_score(40), Band::C);
        assert_eq!(Band::from_score(39), Band::D);
        assert_eq!(Band::from_score(20), Band::D);
        assert_eq!(Band::from_score(19), Band::E);
        assert_eq!(Band::from_score(0), Band::E);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(23.0), "23");
        assert_eq!(format_value(22.5), "22.5");
        assert_eq!(format_value(0.25), "0.25");
        assert_eq!(format_value(0.0), "0");
    }
}
