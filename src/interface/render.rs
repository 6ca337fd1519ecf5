use serde::Serialize;

use crate::benchmarks::{
    Direction, Rule, all_citations, citation, daily_reference, daily_reference_sources,
    nova_group_name, nutriscore_band_info, thresholds,
};
use crate::error::Result;
use crate::models::{Nutrient, NutritionFacts, ProductAnalysis, ScoreFactor, format_value};

/// Print any serializable value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display a full product analysis.
pub fn display_analysis(analysis: &ProductAnalysis) {
    let product = &analysis.product;
    let result = &analysis.score;

    println!();
    println!("=== {} ===", product.name);
    println!("Barcode:     {}", product.barcode);
    println!("Brand:       {}", product.brand);
    println!("Categories:  {}", product.categories);

    match product.nutriscore_grade.as_deref() {
        Some(grade) => {
            let detail = nutriscore_band_info(grade)
                .map(|(color, meaning)| format!(" ({}, {})", color, meaning))
                .unwrap_or_default();
            println!("Nutri-Score: {}{}", grade.to_ascii_uppercase(), detail);
        }
        None => println!("Nutri-Score: N/A"),
    }
    if let Some(group) = product.nova_group {
        println!(
            "NOVA group:  {} ({})",
            group,
            nova_group_name(group).unwrap_or("unknown")
        );
    }

    display_nutrition(&analysis.nutrition);

    println!("--- Health Score ---");
    println!("Score: {}/100   Band: {}", result.score, result.band);
    println!();

    println!("Good points:");
    display_factors(&result.good_points, "No significant positive nutritional factors");
    println!();

    println!("Concerns:");
    display_factors(&result.concerns, "No major nutritional concerns identified");
    println!();

    println!("{}", named_explanation(&product.name, &result.explanation));

    if !result.citations.is_empty() {
        println!();
        println!("Sources:");
        for id in &result.citations {
            if let Some(c) = citation(id) {
                println!("  - {}", c.title);
            }
        }
    }

    println!();
    println!("Ingredients: {}", product.ingredients);
    println!();
}

/// Nutrition table per 100 g with share of the daily reference where known.
pub fn display_nutrition(facts: &NutritionFacts) {
    println!();
    println!("--- Nutrition per 100g ---");

    for nutrient in Nutrient::ALL {
        let value = match facts.get(nutrient) {
            Some(v) => format!("{} {}", format_value(v), nutrient.unit()),
            None => "N/A".to_string(),
        };
        let share = facts
            .get(nutrient)
            .zip(daily_reference(nutrient))
            .map(|(v, r)| format!("  ({:.0}% of {})", r.share(v), r.kind.label()))
            .unwrap_or_default();
        println!("  {:<14} {:>12}{}", nutrient.name(), value, share);
    }

    let known: Vec<Nutrient> = Nutrient::ALL
        .into_iter()
        .filter(|n| facts.get(*n).is_some())
        .collect();
    let sources = daily_reference_sources(&known);
    if !sources.is_empty() {
        println!();
        println!("  Daily values for a 2000 kcal diet, per:");
        for c in sources {
            println!("    - {}", c.title);
        }
    }

    println!();
}

/// Put the product name in front of the score sentence.
pub fn named_explanation(name: &str, explanation: &str) -> String {
    match explanation.strip_prefix("Scores ") {
        Some(rest) => format!("{} scores {}", name, rest),
        None => format!("{}: {}", name, explanation),
    }
}

fn display_factors(factors: &[ScoreFactor], empty_message: &str) {
    if factors.is_empty() {
        println!("  {}", empty_message);
        return;
    }

    for factor in factors {
        let sign = if factor.points >= 0.0 { "+" } else { "-" };
        println!(
            "  {} (threshold {})  {}{} pts",
            factor.summary(),
            factor.threshold,
            sign,
            format_value(factor.points.abs())
        );
    }
}

/// Display the benchmark table.
pub fn display_thresholds() {
    println!();
    println!("=== Scoring Benchmarks (per 100g) ===");
    println!();

    for entry in thresholds() {
        let direction = match entry.direction() {
            Direction::PenalizeAbove => "penalize",
            Direction::RewardAtOrAbove => "reward",
        };
        let effect = match entry.rule {
            Rule::Penalty { slope, max, .. } => format!(
                "-{} pts per {}{} above, max -{}",
                format_value(slope * per_unit(slope)),
                format_value(per_unit(slope)),
                entry.nutrient.unit(),
                format_value(max)
            ),
            Rule::Bonus { tiers } => tiers
                .iter()
                .map(|t| format!("+{} ({})", format_value(t.points), t.label))
                .collect::<Vec<_>>()
                .join(" / "),
        };
        let source = citation(entry.citation)
            .map(|c| c.title)
            .unwrap_or(entry.citation);

        println!(
            "  {:<14} {:<8} {:<16} {}",
            entry.nutrient.name(),
            direction,
            entry.threshold_text(None),
            effect
        );
        println!("  {:<14} source: {}", "", source);
    }

    println!();
}

/// Units per point step, so 1/50 reads as "1 pts per 50mg".
fn per_unit(slope: f64) -> f64 {
    if slope < 1.0 { (1.0 / slope).round() } else { 1.0 }
}

/// Display every citation the scoring and reference tables rely on.
pub fn display_citations() {
    println!();
    println!("=== References ===");
    println!();

    for (i, c) in all_citations().iter().enumerate() {
        println!("{:>2}. {}", i + 1, c.title);
        if let Some(url) = c.url {
            println!("    {}", url);
        }
        println!("    {}", c.explanation);
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_explanation_leads_with_product() {
        let text = named_explanation(
            "Oat Flakes",
            "Scores 100/100 (Band A), indicating excellent nutritional quality.",
        );
        assert_eq!(
            text,
            "Oat Flakes scores 100/100 (Band A), indicating excellent nutritional quality."
        );
    }

    #[test]
    fn test_named_explanation_other_text() {
        assert_eq!(named_explanation("Cola", "No data."), "Cola: No data.");
    }

    #[test]
    fn test_per_unit() {
        assert_float_absolute_eq!(per_unit(1.0 / 50.0), 50.0, 1e-9);
        assert_float_absolute_eq!(per_unit(3.0), 1.0, 1e-9);
    }
}
