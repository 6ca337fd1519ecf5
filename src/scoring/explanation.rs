use std::cmp::Ordering;

use crate::benchmarks::thresholds;
use crate::models::{Band, ScoreFactor, format_value};

/// How many contributions the explanation names.
pub const MAX_EXPLAINED_FACTORS: usize = 3;

/// Build the short natural-language summary of a score.
///
/// Names up to three contributions, largest magnitude first; equal
/// magnitudes keep benchmark table order.
pub fn compose_explanation(
    score: u8,
    band: Band,
    good_points: &[ScoreFactor],
    concerns: &[ScoreFactor],
    no_data: bool,
) -> String {
    let headline = format!(
        "Scores {}/100 (Band {}), indicating {}.",
        score,
        band,
        band.description()
    );

    if no_data {
        return format!(
            "{} No nutrition data was available, so no benchmark could be applied.",
            headline
        );
    }

    let counts = match (good_points.len(), concerns.len()) {
        (0, 0) => {
            return format!(
                "{} No benchmark factors moved the score under WHO/FDA nutrition guidelines.",
                headline
            );
        }
        (good, 0) => format!(
            "{} positive factor{} with no major concerns",
            good,
            plural(good)
        ),
        (0, bad) => format!("{} nutritional concern{}", bad, plural(bad)),
        (good, bad) => format!(
            "{} positive factor{} but also {} concern{}",
            good,
            plural(good),
            bad,
            plural(bad)
        ),
    };

    let dominant = dominant_factors(good_points, concerns)
        .iter()
        .map(|f| format!("{} ({} pts)", f.label, signed(f.points)))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{} This product has {} based on WHO/FDA guidelines. Largest effects: {}.",
        headline, counts, dominant
    )
}

/// The fired factors ordered by absolute contribution, capped at three.
pub fn dominant_factors<'a>(
    good_points: &'a [ScoreFactor],
    concerns: &'a [ScoreFactor],
) -> Vec<&'a ScoreFactor> {
    let mut all: Vec<&ScoreFactor> = concerns.iter().chain(good_points.iter()).collect();
    all.sort_by_key(|f| table_position(f));
    // Stable sort keeps table order among equal magnitudes.
    all.sort_by(|a, b| {
        b.points
            .abs()
            .partial_cmp(&a.points.abs())
            .unwrap_or(Ordering::Equal)
    });
    all.truncate(MAX_EXPLAINED_FACTORS);
    all
}

fn table_position(factor: &ScoreFactor) -> usize {
    thresholds()
        .iter()
        .position(|e| e.nutrient == factor.nutrient)
        .unwrap_or(usize::MAX)
}

fn signed(points: f64) -> String {
    let sign = if points >= 0.0 { "+" } else { "-" };
    format!("{}{}", sign, format_value(points.abs()))
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
