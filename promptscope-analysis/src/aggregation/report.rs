//! The corpus report — the engine's output contract.
//!
//! Serialized key order is deterministic (`BTreeMap` throughout) so
//! repeated runs over identical input produce identical output, the
//! `analysis_date` field aside.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::Category;
use crate::engine::types::PromptAnalysis;

use super::signals::InsightSignal;
use super::types::{ComplexityMetrics, ConventionUsage, DiscoverySummary, GroupProfile};

/// Corpus-level headline numbers.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    /// All records loaded, including those with empty text.
    pub total_prompts: usize,
    /// Records with non-empty text — the percentage denominator.
    pub analyzed_prompts: usize,
    /// Mean compliance score over analyzed records, rounded to 2 decimals.
    pub average_compliance_score: f64,
    /// ISO-8601 timestamp of the run.
    pub analysis_date: String,
}

/// Grouped slice of the corpus report, keyed by group name at the top level.
#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    pub profile: GroupProfile,
    pub convention_usage: BTreeMap<Category, BTreeMap<String, ConventionUsage>>,
    pub signal_usage: BTreeMap<InsightSignal, ConventionUsage>,
    pub discovered_patterns: DiscoverySummary,
}

/// The full analysis report for one corpus run.
#[derive(Debug, Clone, Serialize)]
pub struct CorpusReport {
    pub summary: ReportSummary,
    /// Category → convention → usage. Every catalog convention appears,
    /// zero-count entries included.
    pub convention_usage: BTreeMap<Category, BTreeMap<String, ConventionUsage>>,
    /// `<category>_<convention>` → every matched snippet, unbounded.
    /// Display layers truncate; the engine does not.
    pub convention_matches: BTreeMap<String, Vec<String>>,
    pub signal_usage: BTreeMap<InsightSignal, ConventionUsage>,
    pub discovered_patterns: DiscoverySummary,
    pub quality_issues: Vec<String>,
    pub best_practices: Vec<String>,
    pub recommendations: Vec<String>,
    pub groups: BTreeMap<String, GroupReport>,
    pub complexity: Vec<ComplexityMetrics>,
    pub individual_analyses: Vec<PromptAnalysis>,
}

impl CorpusReport {
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    pub fn to_json_string_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
