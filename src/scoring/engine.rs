use crate::benchmarks::{Rule, thresholds};
use crate::error::{AnalystError, Result};
use crate::models::{Band, NutritionFacts, ScoreFactor, ScoreResult, format_value};
use crate::scoring::explanation::compose_explanation;

/// Every product starts from a perfect score.
pub const BASE_SCORE: f64 = 100.0;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Score a nutrition record against the benchmark table.
///
/// Absent fields are skipped by every rule. A record with no known values
/// scores 100 (band A). Negative, non-finite or implausibly large values are
/// a caller bug and fail with `InvalidInput`.
pub fn score(facts: &NutritionFacts) -> Result<ScoreResult> {
    validate(facts)?;

    let mut total = BASE_SCORE;
    let mut good_points = Vec::new();
    let mut concerns = Vec::new();
    let mut citations: Vec<&'static str> = Vec::new();

    for entry in thresholds() {
        let Some(value) = facts.get(entry.nutrient) else {
            continue;
        };

        let fired = match entry.rule {
            Rule::Penalty { label, .. } => {
                let penalty = entry.penalty(value);
                if penalty > 0.0 {
                    total -= penalty;
                    concerns.push(ScoreFactor {
                        nutrient: entry.nutrient,
                        label,
                        value,
                        unit: entry.nutrient.unit(),
                        threshold: entry.threshold_text(None),
                        points: -penalty,
                        citation: entry.citation,
                    });
                    true
                } else {
                    false
                }
            }
            Rule::Bonus { .. } => match entry.bonus_tier(value) {
                Some(tier) => {
                    total += tier.points;
                    good_points.push(ScoreFactor {
                        nutrient: entry.nutrient,
                        label: tier.label,
                        value,
                        unit: entry.nutrient.unit(),
                        threshold: entry.threshold_text(Some(tier)),
                        points: tier.points,
                        citation: entry.citation,
                    });
                    true
                }
                None => false,
            },
        };

        if fired && !citations.contains(&entry.citation) {
            citations.push(entry.citation);
        }
    }

    let final_score = clamp_and_round(total);
    let band = Band::from_score(final_score);
    let explanation = compose_explanation(
        final_score,
        band,
        &good_points,
        &concerns,
        facts.is_empty(),
    );

    Ok(ScoreResult {
        score: final_score,
        band,
        good_points,
        concerns,
        explanation,
        citations,
    })
}

/// Reject values the benchmark table was never meant to see.
fn validate(facts: &NutritionFacts) -> Result<()> {
    if let Some((nutrient, value)) = facts.out_of_range().into_iter().next() {
        return Err(AnalystError::InvalidInput(format!(
            "{} must be between 0 and {} {} per 100g, got {}",
            nutrient,
            format_value(nutrient.plausible_max()),
            nutrient.unit(),
            value
        )));
    }
    Ok(())
}

/// Clamp to [0, 100] and round half up.
fn clamp_and_round(total: f64) -> u8 {
    (total.clamp(MIN_SCORE, MAX_SCORE) + 0.5).floor() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Nutrient;

    #[test]
    fn test_clamp_and_round() {
        assert_eq!(clamp_and_round(150.0), 100);
        assert_eq!(clamp_and_round(-20.0), 0);
        assert_eq!(clamp_and_round(79.5), 80);
        assert_eq!(clamp_and_round(79.49), 79);
        assert_eq!(clamp_and_round(0.5), 1);
    }

    #[test]
    fn test_empty_record_scores_perfect() {
        let result = score(&NutritionFacts::default()).unwrap();
        assert_eq!(result.score, 100);
        assert_eq!(result.band, Band::A);
        assert!(result.good_points.is_empty());
        assert!(result.concerns.is_empty());
        assert!(result.citations.is_empty());
    }

    #[test]
    fn test_negative_value_rejected() {
        let facts = NutritionFacts::default().with(Nutrient::Sugar, -0.1);
        let err = score(&facts).unwrap_err();
        assert!(matches!(err, AnalystError::InvalidInput(_)));
    }

    #[test]
    fn test_nan_rejected() {
        let facts = NutritionFacts::default().with(Nutrient::Protein, f64::NAN);
        assert!(matches!(
            score(&facts),
            Err(AnalystError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_penalties_accumulate() {
        // sugar 32.5 -> -20, sat fat 10 -> -15, sodium 1100 -> -10, energy 500 -> -2
        let facts = NutritionFacts::default()
            .with(Nutrient::Sugar, 32.5)
            .with(Nutrient::SaturatedFat, 10.0)
            .with(Nutrient::Sodium, 1100.0)
            .with(Nutrient::Energy, 500.0);
        let result = score(&facts).unwrap();
        assert_eq!(result.score, 53);
        assert_eq!(result.band, Band::C);
        assert_eq!(result.concerns.len(), 4);
        assert_float_absolute_eq!(result.concerns[0].points, -20.0, 1e-9);
        assert_float_absolute_eq!(result.concerns[1].points, -15.0, 1e-9);
        assert_float_absolute_eq!(result.concerns[2].points, -10.0, 1e-9);
        assert_float_absolute_eq!(result.concerns[3].points, -2.0, 1e-9);
    }

    #[test]
    fn test_citations_deduplicated_in_table_order() {
        let facts = NutritionFacts::default()
            .with(Nutrient::Sugar, 40.0)
            .with(Nutrient::Sodium, 900.0)
            .with(Nutrient::Fiber, 7.0);
        let result = score(&facts).unwrap();
        assert_eq!(
            result.citations,
            vec![
                crate::benchmarks::citations::CITE_UK_FSA,
                crate::benchmarks::citations::CITE_EU_CLAIMS,
            ]
        );
    }
}
