//! Per-record analysis: pattern matching and catalog scanning.

pub mod analyzer;
pub mod matcher;
pub mod types;

pub use analyzer::{compliance_score, SinglePromptAnalyzer};
pub use matcher::CompiledPattern;
pub use types::{MatchResult, PromptAnalysis};
