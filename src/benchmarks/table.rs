use crate::models::Nutrient;

use super::citations::{CITE_EU_CLAIMS, CITE_FDA_DRV, CITE_UK_FSA};

/// Whether exceeding the threshold costs or earns points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    PenalizeAbove,
    RewardAtOrAbove,
}

/// One reward tier. Tiers of a rule are listed highest first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BonusTier {
    pub label: &'static str,
    pub threshold: f64,
    pub points: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// Linear from `threshold`, `slope` points per unit, capped at `max`.
    Penalty {
        label: &'static str,
        threshold: f64,
        slope: f64,
        max: f64,
    },
    /// Highest tier met wins; tiers never stack.
    Bonus { tiers: &'static [BonusTier] },
}

/// A named threshold rule backed by a citation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkEntry {
    pub nutrient: Nutrient,
    pub rule: Rule,
    pub citation: &'static str,
}

impl BenchmarkEntry {
    pub fn direction(&self) -> Direction {
        match self.rule {
            Rule::Penalty { .. } => Direction::PenalizeAbove,
            Rule::Bonus { .. } => Direction::RewardAtOrAbove,
        }
    }

    /// Largest number of points this rule can move the score.
    pub fn max_magnitude(&self) -> f64 {
        match self.rule {
            Rule::Penalty { max, .. } => max,
            Rule::Bonus { tiers } => tiers.iter().map(|t| t.points).fold(0.0, f64::max),
        }
    }

    /// Points deducted for `value`. Zero at or below the threshold.
    pub fn penalty(&self, value: f64) -> f64 {
        match self.rule {
            Rule::Penalty {
                threshold,
                slope,
                max,
                ..
            } if value > threshold => ((value - threshold) * slope).min(max),
            _ => 0.0,
        }
    }

    /// The highest tier reached by `value`, if any.
    pub fn bonus_tier(&self, value: f64) -> Option<&'static BonusTier> {
        match self.rule {
            Rule::Bonus { tiers } => tiers.iter().find(|t| value >= t.threshold),
            Rule::Penalty { .. } => None,
        }
    }

    /// Threshold text as shown next to a concern or good point, e.g. ">22.5 g".
    pub fn threshold_text(&self, tier: Option<&BonusTier>) -> String {
        let unit = self.nutrient.unit();
        match (self.rule, tier) {
            (Rule::Penalty { threshold, .. }, _) => format!(">{} {}", threshold, unit),
            (Rule::Bonus { .. }, Some(tier)) => format!("≥{} {}", tier.threshold, unit),
            (Rule::Bonus { tiers }, None) => tiers
                .iter()
                .map(|t| format!("≥{} {}", t.threshold, unit))
                .collect::<Vec<_>>()
                .join(" / "),
        }
    }
}

static FIBER_TIERS: [BonusTier; 2] = [
    BonusTier {
        label: "Very High Fiber",
        threshold: 12.0,
        points: 15.0,
    },
    BonusTier {
        label: "High Fiber",
        threshold: 6.0,
        points: 8.0,
    },
];

static PROTEIN_TIERS: [BonusTier; 1] = [BonusTier {
    label: "Good Protein Content",
    threshold: 10.0,
    points: 10.0,
}];

// ─────────────────────────────────────────────────────────────────────────────
// Scoring thresholds per 100 g
// Order here is the order of good points and concerns in every result.
// ─────────────────────────────────────────────────────────────────────────────

static THRESHOLDS: [BenchmarkEntry; 6] = [
    BenchmarkEntry {
        nutrient: Nutrient::Sugar,
        rule: Rule::Penalty {
            label: "High Sugar",
            threshold: 22.5,
            slope: 2.0,
            max: 30.0,
        },
        citation: CITE_UK_FSA,
    },
    BenchmarkEntry {
        nutrient: Nutrient::SaturatedFat,
        rule: Rule::Penalty {
            label: "High Saturated Fat",
            threshold: 5.0,
            slope: 3.0,
            max: 25.0,
        },
        citation: CITE_UK_FSA,
    },
    BenchmarkEntry {
        nutrient: Nutrient::Sodium,
        rule: Rule::Penalty {
            label: "High Sodium",
            threshold: 600.0,
            slope: 1.0 / 50.0,
            max: 25.0,
        },
        citation: CITE_UK_FSA,
    },
    BenchmarkEntry {
        nutrient: Nutrient::Energy,
        rule: Rule::Penalty {
            label: "High Calorie Density",
            threshold: 400.0,
            slope: 1.0 / 50.0,
            max: 10.0,
        },
        citation: CITE_FDA_DRV,
    },
    BenchmarkEntry {
        nutrient: Nutrient::Fiber,
        rule: Rule::Bonus {
            tiers: &FIBER_TIERS,
        },
        citation: CITE_EU_CLAIMS,
    },
    BenchmarkEntry {
        nutrient: Nutrient::Protein,
        rule: Rule::Bonus {
            tiers: &PROTEIN_TIERS,
        },
        citation: CITE_FDA_DRV,
    },
];

/// The fixed, ordered benchmark table.
pub fn thresholds() -> &'static [BenchmarkEntry] {
    &THRESHOLDS
}

/// Look up the rule for a nutrient.
pub fn entry_for(nutrient: Nutrient) -> Option<&'static BenchmarkEntry> {
    THRESHOLDS.iter().find(|e| e.nutrient == nutrient)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order() {
        let order: Vec<Nutrient> = thresholds().iter().map(|e| e.nutrient).collect();
        assert_eq!(
            order,
            vec![
                Nutrient::Sugar,
                Nutrient::SaturatedFat,
                Nutrient::Sodium,
                Nutrient::Energy,
                Nutrient::Fiber,
                Nutrient::Protein,
            ]
        );
    }

    #[test]
    fn test_max_magnitudes() {
        let max = |n| entry_for(n).unwrap().max_magnitude();
        assert_float_absolute_eq!(max(Nutrient::Sugar), 30.0, 1e-9);
        assert_float_absolute_eq!(max(Nutrient::SaturatedFat), 25.0, 1e-9);
        assert_float_absolute_eq!(max(Nutrient::Sodium), 25.0, 1e-9);
        assert_float_absolute_eq!(max(Nutrient::Energy), 10.0, 1e-9);
        assert_float_absolute_eq!(max(Nutrient::Fiber), 15.0, 1e-9);
        assert_float_absolute_eq!(max(Nutrient::Protein), 10.0, 1e-9);
    }

    #[test]
    fn test_penalty_zero_at_threshold_and_capped() {
        let sugar = entry_for(Nutrient::Sugar).unwrap();
        assert_eq!(sugar.penalty(22.5), 0.0);
        assert_eq!(sugar.penalty(10.0), 0.0);
        assert_float_absolute_eq!(sugar.penalty(23.0), 1.0, 1e-9);
        assert_float_absolute_eq!(sugar.penalty(37.5), 30.0, 1e-9);
        assert_float_absolute_eq!(sugar.penalty(90.0), 30.0, 1e-9);

        let sodium = entry_for(Nutrient::Sodium).unwrap();
        assert_eq!(sodium.penalty(600.0), 0.0);
        assert_float_absolute_eq!(sodium.penalty(700.0), 2.0, 1e-9);
        assert_float_absolute_eq!(sodium.penalty(5_000.0), 25.0, 1e-9);
    }

    #[test]
    fn test_bonus_tiers_exclusive() {
        let fiber = entry_for(Nutrient::Fiber).unwrap();
        assert!(fiber.bonus_tier(5.9).is_none());
        assert_eq!(fiber.bonus_tier(6.0).unwrap().points, 8.0);
        assert_eq!(fiber.bonus_tier(12.0).unwrap().points, 15.0);
        assert_eq!(fiber.bonus_tier(30.0).unwrap().label, "Very High Fiber");
    }

    #[test]
    fn test_threshold_text() {
        let sugar = entry_for(Nutrient::Sugar).unwrap();
        assert_eq!(sugar.threshold_text(None), ">22.5 g");

        let fiber = entry_for(Nutrient::Fiber).unwrap();
        assert_eq!(fiber.threshold_text(None), "≥12 g / ≥6 g");
        assert_eq!(fiber.threshold_text(fiber.bonus_tier(7.0)), "≥6 g");
    }

    #[test]
    fn test_directions() {
        assert_eq!(
            entry_for(Nutrient::Energy).unwrap().direction(),
            Direction::PenalizeAbove
        );
        assert_eq!(
            entry_for(Nutrient::Protein).unwrap().direction(),
            Direction::RewardAtOrAbove
        );
        assert!(entry_for(Nutrient::Carbohydrates).is_none());
    }
}
