//! Per-record analysis types.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::Category;

/// Outcome of matching one convention against one record's text.
///
/// Derived once, never mutated.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchResult {
    pub found: bool,
    pub count: usize,
    /// Matched substrings, in appearance order.
    pub matches: Vec<String>,
}

impl MatchResult {
    pub fn from_matches(matches: Vec<String>) -> Self {
        Self {
            found: !matches.is_empty(),
            count: matches.len(),
            matches,
        }
    }
}

/// Full catalog results for one record.
#[derive(Debug, Clone, Serialize)]
pub struct PromptAnalysis {
    pub prompt_id: String,
    pub group_key: String,
    /// Category → convention name → match result.
    pub convention_results: BTreeMap<Category, BTreeMap<String, MatchResult>>,
    /// Number of distinct conventions with at least one match, per category.
    pub category_hits: BTreeMap<Category, usize>,
    /// Weighted breadth score in [0, 100]; see
    /// [`compliance_score`](super::analyzer::compliance_score).
    pub compliance_score: f64,
}
