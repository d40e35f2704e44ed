//! Per-prompt catalog analysis and compliance scoring.

use std::collections::BTreeMap;

use crate::catalog::{Category, ConventionCatalog};
use crate::corpus::PromptRecord;

use super::types::{MatchResult, PromptAnalysis};

/// Runs every catalog convention against one record's extracted text.
pub struct SinglePromptAnalyzer<'a> {
    catalog: &'a ConventionCatalog,
}

impl<'a> SinglePromptAnalyzer<'a> {
    pub fn new(catalog: &'a ConventionCatalog) -> Self {
        Self { catalog }
    }

    /// Analyze one record. Empty text yields a valid all-zero analysis.
    pub fn analyze(&self, record: &PromptRecord) -> PromptAnalysis {
        let mut convention_results: BTreeMap<Category, BTreeMap<String, MatchResult>> =
            BTreeMap::new();
        let mut category_hits: BTreeMap<Category, usize> = BTreeMap::new();

        for category in Category::ALL {
            convention_results.insert(category, BTreeMap::new());
            category_hits.insert(category, 0);
        }

        for convention in self.catalog.conventions() {
            let category = convention.definition.category;
            let result = MatchResult::from_matches(convention.pattern.find_matches(&record.text));
            if result.found {
                *category_hits.entry(category).or_insert(0) += 1;
            }
            convention_results
                .entry(category)
                .or_default()
                .insert(convention.definition.name.to_string(), result);
        }

        let score = compliance_score(&category_hits);

        PromptAnalysis {
            prompt_id: record.id.clone(),
            group_key: record.group_key.clone(),
            convention_results,
            category_hits,
            compliance_score: score,
        }
    }
}

/// Weighted breadth score in [0, 100].
///
/// Each distinct convention hit contributes one full category weight,
/// capped at that category's weight — one matching convention in a
/// 25-weight category already scores 25. This rewards breadth across
/// categories over depth within one; the saturating formula is the
/// long-standing scoring behavior and is kept as-is.
pub fn compliance_score(category_hits: &BTreeMap<Category, usize>) -> f64 {
    let score: u32 = Category::ALL
        .iter()
        .map(|category| {
            let hits = category_hits.get(category).copied().unwrap_or(0) as u32;
            (hits.saturating_mul(category.weight())).min(category.weight())
        })
        .sum();
    f64::from(score.min(100))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str) -> PromptRecord {
        PromptRecord {
            id: "test".to_string(),
            group_key: "Unknown".to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn zero_matches_scores_zero() {
        let hits = BTreeMap::new();
        assert_eq!(compliance_score(&hits), 0.0);
    }

    #[test]
    fn one_hit_saturates_its_category() {
        let mut hits = BTreeMap::new();
        hits.insert(Category::ContextBlocks, 1);
        assert_eq!(compliance_score(&hits), 25.0);
        // More hits in the same category cannot exceed the ceiling.
        hits.insert(Category::ContextBlocks, 4);
        assert_eq!(compliance_score(&hits), 25.0);
    }

    #[test]
    fn all_categories_hit_scores_100() {
        let mut hits = BTreeMap::new();
        for category in Category::ALL {
            hits.insert(category, 3);
        }
        assert_eq!(compliance_score(&hits), 100.0);
    }

    #[test]
    fn analyzer_populates_every_convention() {
        let catalog = ConventionCatalog::new();
        let analyzer = SinglePromptAnalyzer::new(&catalog);
        let analysis = analyzer.analyze(&record("plain text with no conventions"));

        let total: usize = analysis.convention_results.values().map(|c| c.len()).sum();
        assert_eq!(total, catalog.len(), "every convention reports a result");
        assert_eq!(analysis.compliance_score, 0.0);
    }

    #[test]
    fn analyzer_counts_distinct_conventions_per_category() {
        let catalog = ConventionCatalog::new();
        let analyzer = SinglePromptAnalyzer::new(&catalog);
        let analysis = analyzer.analyze(&record(
            "ROLE: You are an assistant.\n<Context>data</Context>\nDo not hallucinate.",
        ));

        assert!(analysis.category_hits[&Category::Sections] >= 1);
        assert!(analysis.category_hits[&Category::AntiHallucination] >= 1);
        assert!(analysis.compliance_score > 0.0);
        assert!(analysis.compliance_score <= 100.0);
    }

    #[test]
    fn empty_text_yields_valid_empty_analysis() {
        let catalog = ConventionCatalog::new();
        let analyzer = SinglePromptAnalyzer::new(&catalog);
        let analysis = analyzer.analyze(&record(""));
        assert_eq!(analysis.compliance_score, 0.0);
        assert!(analysis.convention_results.values().flat_map(|c| c.values()).all(|r| !r.found));
    }
}
