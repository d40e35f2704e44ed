//! Aggregation output types.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::discovery::types::{DiscoveredPatterns, NamingStyle, VariableSyntax};

/// Usage counter for one convention or signal across the corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ConventionUsage {
    /// Number of analyzed records in which it was found at least once.
    pub count: usize,
    /// 100 × count / analyzed-record count.
    pub percentage: f64,
}

/// Corpus- or group-level multiset counters for discovered structures.
///
/// Tag names are deduplicated within a record, so each counter is the
/// number of analyzed records exhibiting that structure.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DiscoverySummary {
    pub total_prompts_analyzed: usize,
    pub xml_tags: BTreeMap<String, usize>,
    pub at_tags: BTreeMap<String, usize>,
    pub variable_formats: BTreeMap<VariableSyntax, usize>,
    pub section_headers: BTreeMap<String, usize>,
    pub naming_conventions: BTreeMap<NamingStyle, usize>,
}

impl DiscoverySummary {
    /// Fold one record's discoveries into the summary.
    pub fn absorb(&mut self, patterns: &DiscoveredPatterns) {
        self.total_prompts_analyzed += 1;

        for tag in &patterns.xml_tags {
            *self.xml_tags.entry(tag.clone()).or_insert(0) += 1;
        }
        for tag in &patterns.at_tags {
            *self.at_tags.entry(tag.clone()).or_insert(0) += 1;
        }
        for (syntax, names) in &patterns.variables {
            if !names.is_empty() {
                *self.variable_formats.entry(*syntax).or_insert(0) += 1;
            }
        }
        for header in &patterns.section_headers {
            *self.section_headers.entry(header.clone()).or_insert(0) += 1;
        }
        for style in &patterns.naming_conventions {
            *self.naming_conventions.entry(*style).or_insert(0) += 1;
        }
    }
}

/// Per-group record counts and text-length statistics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupProfile {
    pub total_records: usize,
    /// Records with non-empty text (the group's percentage denominator).
    pub analyzed_records: usize,
    /// 100 × total_records / corpus record count.
    pub share_of_corpus: f64,
    pub avg_text_length: f64,
    pub shortest_text: usize,
    pub longest_text: usize,
}

/// Structure metrics for one analyzed record.
#[derive(Debug, Clone, Serialize)]
pub struct ComplexityMetrics {
    pub prompt_id: String,
    /// Text length in characters.
    pub length: usize,
    /// Number of XML-style open tags.
    pub xml_open_tags: usize,
    /// Open tags per 1000 characters.
    pub tag_density: f64,
    /// Instruction keywords per 1000 characters.
    pub instruction_density: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn absorb_counts_records_not_occurrences_for_variables() {
        let mut summary = DiscoverySummary::default();
        let mut patterns = DiscoveredPatterns::default();
        patterns
            .variables
            .insert(VariableSyntax::DoubleBraces, vec!["a".into(), "b".into(), "c".into()]);
        summary.absorb(&patterns);

        // Three captured names in one record still count as one record.
        assert_eq!(summary.variable_formats[&VariableSyntax::DoubleBraces], 1);
    }

    #[test]
    fn absorb_accumulates_tag_multisets_across_records() {
        let mut summary = DiscoverySummary::default();
        for _ in 0..3 {
            let patterns = DiscoveredPatterns {
                xml_tags: vec!["Topic".to_string()],
                naming_conventions: BTreeSet::from([NamingStyle::CamelCase]),
                ..Default::default()
            };
            summary.absorb(&patterns);
        }
        assert_eq!(summary.xml_tags["Topic"], 3);
        assert_eq!(summary.naming_conventions[&NamingStyle::CamelCase], 3);
        assert_eq!(summary.total_prompts_analyzed, 3);
    }
}
