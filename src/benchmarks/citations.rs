use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use crate::models::Nutrient;

pub const CITE_UK_FSA: &str = "uk-fsa-traffic-light-2013";
pub const CITE_EU_CLAIMS: &str = "eu-nutrition-claims-2006";
pub const CITE_FDA_DRV: &str = "fda-daily-reference-values-2016";
pub const CITE_WHO_SUGARS: &str = "who-sugars-2015";
pub const CITE_WHO_DIET: &str = "who-diet-2003";
pub const CITE_WHO_SODIUM: &str = "who-sodium-2012";
pub const CITE_NUTRISCORE: &str = "nutri-score-2017";
pub const CITE_NOVA: &str = "nova-2019";

/// A source backing a benchmark or reference value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    pub id: &'static str,
    pub title: &'static str,
    pub url: Option<&'static str>,
    pub explanation: &'static str,
}

static CITATION_LIST: [Citation; 8] = [
    Citation {
        id: CITE_FDA_DRV,
        title: "FDA Daily Reference Values (2016)",
        url: Some(
            "https://www.fda.gov/food/nutrition-facts-label/daily-value-nutrition-and-supplement-facts-labels",
        ),
        explanation: "Daily reference values for energy, fiber and protein based on a 2000 kcal diet",
    },
    Citation {
        id: CITE_WHO_SUGARS,
        title: "WHO Guideline: Sugars intake for adults and children (2015)",
        url: Some("https://www.who.int/publications/i/item/9789241549028"),
        explanation: "WHO strongly recommends reducing free sugars to less than 10% of total energy intake",
    },
    Citation {
        id: CITE_WHO_DIET,
        title: "WHO Diet, nutrition and the prevention of chronic diseases (2003)",
        url: Some("https://www.who.int/publications/i/item/924120916X"),
        explanation: "Saturated fat intake should be less than 10% of total energy intake",
    },
    Citation {
        id: CITE_WHO_SODIUM,
        title: "WHO Guideline: Sodium intake for adults and children (2012)",
        url: Some("https://www.who.int/publications/i/item/9789241504836"),
        explanation: "WHO recommends reducing sodium intake to less than 2000 mg/day (5g salt)",
    },
    Citation {
        id: CITE_NUTRISCORE,
        title: "Santé Publique France - Nutri-Score (2017)",
        url: Some("https://www.santepubliquefrance.fr/en/nutri-score"),
        explanation: "Front-of-pack label grading products A (best) to E (worst) from nutrients to favor \
                      (fiber, protein, fruits, vegetables, legumes, nuts) and nutrients to limit \
                      (energy, saturated fat, sugars, salt)",
    },
    Citation {
        id: CITE_NOVA,
        title: "Monteiro CA, et al. Ultra-processed foods: what they are and how to identify them. \
                Public Health Nutrition (2019)",
        url: Some("https://www.fao.org/3/ca5644en/ca5644en.pdf"),
        explanation: "Classifies food by extent and purpose of industrial processing; ultra-processed \
                      foods (group 4) are associated with obesity, type 2 diabetes and cardiovascular disease",
    },
    Citation {
        id: CITE_UK_FSA,
        title: "UK Food Standards Agency Traffic Light Labelling (2013)",
        url: None,
        explanation: "Traffic light criteria for sugar, saturated fat and salt content per 100g",
    },
    Citation {
        id: CITE_EU_CLAIMS,
        title: "EU Nutrition and Health Claims Regulation (2006)",
        url: None,
        explanation: "Criteria for 'source of fiber' (≥6g/100g) and 'high in fiber' (≥12g/100g) claims",
    },
];

static CITATIONS: LazyLock<BTreeMap<&'static str, &'static Citation>> =
    LazyLock::new(|| CITATION_LIST.iter().map(|c| (c.id, c)).collect());

/// Map from citation id to citation.
pub fn citations() -> &'static BTreeMap<&'static str, &'static Citation> {
    &CITATIONS
}

/// Look up a single citation.
pub fn citation(id: &str) -> Option<&'static Citation> {
    CITATIONS.get(id).copied()
}

/// Every citation the application references, unique by title, in display order.
pub fn all_citations() -> Vec<&'static Citation> {
    let mut seen = HashSet::new();
    CITATION_LIST
        .iter()
        .filter(|c| seen.insert(c.title))
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Daily reference values (2000 kcal diet)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// Upper limit for the day.
    Maximum,
    /// Target to reach.
    Minimum,
    /// Plain reference amount.
    Reference,
}

impl ReferenceKind {
    pub fn label(&self) -> &'static str {
        match self {
            ReferenceKind::Maximum => "daily max",
            ReferenceKind::Minimum => "daily target",
            ReferenceKind::Reference => "daily ref.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyReference {
    pub nutrient: Nutrient,
    pub amount: f64,
    pub kind: ReferenceKind,
    pub citation: &'static str,
}

impl DailyReference {
    /// Percentage of this reference covered by `value`.
    pub fn share(&self, value: f64) -> f64 {
        value / self.amount * 100.0
    }
}

static DAILY_REFERENCES: [DailyReference; 6] = [
    DailyReference {
        nutrient: Nutrient::Energy,
        amount: 2000.0,
        kind: ReferenceKind::Reference,
        citation: CITE_FDA_DRV,
    },
    DailyReference {
        nutrient: Nutrient::Sugar,
        amount: 50.0,
        kind: ReferenceKind::Maximum,
        citation: CITE_WHO_SUGARS,
    },
    DailyReference {
        nutrient: Nutrient::SaturatedFat,
        amount: 20.0,
        kind: ReferenceKind::Maximum,
        citation: CITE_WHO_DIET,
    },
    DailyReference {
        nutrient: Nutrient::Sodium,
        amount: 2000.0,
        kind: ReferenceKind::Maximum,
        citation: CITE_WHO_SODIUM,
    },
    DailyReference {
        nutrient: Nutrient::Fiber,
        amount: 25.0,
        kind: ReferenceKind::Minimum,
        citation: CITE_FDA_DRV,
    },
    DailyReference {
        nutrient: Nutrient::Protein,
        amount: 50.0,
        kind: ReferenceKind::Reference,
        citation: CITE_FDA_DRV,
    },
];

/// Daily reference for a nutrient, if one is published.
pub fn daily_reference(nutrient: Nutrient) -> Option<&'static DailyReference> {
    DAILY_REFERENCES.iter().find(|r| r.nutrient == nutrient)
}

/// Percentage of the daily reference covered by `value` (per 100 g).
pub fn daily_share(nutrient: Nutrient, value: f64) -> Option<f64> {
    daily_reference(nutrient).map(|r| r.share(value))
}

/// Sources behind the daily references of the given nutrients, first use first.
pub fn daily_reference_sources(nutrients: &[Nutrient]) -> Vec<&'static Citation> {
    let mut sources: Vec<&'static Citation> = Vec::new();
    let cited = nutrients
        .iter()
        .filter_map(|n| daily_reference(*n))
        .filter_map(|r| citation(r.citation));
    for c in cited {
        if !sources.iter().any(|s| s.id == c.id) {
            sources.push(c);
        }
    }
    sources
}

// ─────────────────────────────────────────────────────────────────────────────
// Display-only reference tables
// ─────────────────────────────────────────────────────────────────────────────

/// Color and meaning of an external Nutri-Score grade.
pub fn nutriscore_band_info(grade: &str) -> Option<(&'static str, &'static str)> {
    match grade.trim().to_ascii_lowercase().as_str() {
        "a" => Some(("Dark Green", "Best nutritional quality")),
        "b" => Some(("Light Green", "Good nutritional quality")),
        "c" => Some(("Yellow", "Acceptable nutritional quality")),
        "d" => Some(("Orange", "Poor nutritional quality")),
        "e" => Some(("Red", "Lowest nutritional quality")),
        _ => None,
    }
}

/// NOVA food processing group description.
pub fn nova_group_name(group: u8) -> Option<&'static str> {
    match group {
        1 => Some("Unprocessed or minimally processed foods"),
        2 => Some("Processed culinary ingredients"),
        3 => Some("Processed foods"),
        4 => Some("Ultra-processed food and drink products"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmarks::thresholds;

    #[test]
    fn test_every_threshold_has_citation() {
        for entry in thresholds() {
            assert!(
                citation(entry.citation).is_some(),
                "missing citation {}",
                entry.citation
            );
        }
    }

    #[test]
    fn test_all_citations_unique() {
        let all = all_citations();
        assert_eq!(all.len(), citations().len());
        let titles: HashSet<_> = all.iter().map(|c| c.title).collect();
        assert_eq!(titles.len(), all.len());
    }

    #[test]
    fn test_daily_share() {
        assert_float_absolute_eq!(daily_share(Nutrient::Sugar, 25.0).unwrap(), 50.0, 1e-9);
        assert_float_absolute_eq!(daily_share(Nutrient::Sodium, 500.0).unwrap(), 25.0, 1e-9);
        assert!(daily_share(Nutrient::Carbohydrates, 10.0).is_none());
    }

    #[test]
    fn test_daily_reference_kinds_and_sources() {
        let sugar = daily_reference(Nutrient::Sugar).unwrap();
        assert_eq!(sugar.kind, ReferenceKind::Maximum);
        assert_eq!(sugar.kind.label(), "daily max");
        assert_eq!(sugar.citation, CITE_WHO_SUGARS);
        assert_eq!(
            daily_reference(Nutrient::Fiber).unwrap().kind.label(),
            "daily target"
        );

        for r in &DAILY_REFERENCES {
            assert!(citation(r.citation).is_some(), "missing citation {}", r.citation);
        }

        let sources = daily_reference_sources(&[
            Nutrient::Energy,
            Nutrient::Fat,
            Nutrient::Sugar,
            Nutrient::Protein,
        ]);
        let ids: Vec<_> = sources.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![CITE_FDA_DRV, CITE_WHO_SUGARS]);
    }

    #[test]
    fn test_reference_lookups() {
        assert_eq!(nutriscore_band_info("A").unwrap().0, "Dark Green");
        assert!(nutriscore_band_info("unknown").is_none());
        assert_eq!(nova_group_name(4), Some("Ultra-processed food and drink products"));
        assert!(nova_group_name(0).is_none());
    }
}
