//! Query routing.
//!
//! Pure dispatch: maps a canned question or free text to the matching
//! slice of a finished report. No additional computation happens here.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::aggregation::report::CorpusReport;
use crate::catalog::Category;

/// The questions the engine can answer directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    TopicEndTopic,
    ContextBlocks,
    VariablePatterns,
    SectionUsage,
    MarkdownUsage,
    AntiHallucination,
    Comprehensive,
}

impl Question {
    /// Keyword dispatch for free-text questions. Unrecognized questions
    /// fall through to the comprehensive report.
    pub fn from_free_text(question: &str) -> Self {
        let q = question.to_lowercase();
        if q.contains("topic") && q.contains("endtopic") {
            Question::TopicEndTopic
        } else if q.contains("context") && q.contains("block") {
            Question::ContextBlocks
        } else if q.contains("variable") {
            Question::VariablePatterns
        } else if q.contains("section") {
            Question::SectionUsage
        } else if q.contains("markdown") {
            Question::MarkdownUsage
        } else if q.contains("anti-hallucination") || q.contains("hallucinate") {
            Question::AntiHallucination
        } else {
            Question::Comprehensive
        }
    }
}

/// One convention's numbers within a slice, with display-truncated examples.
#[derive(Debug, Clone, Serialize)]
pub struct SliceEntry {
    pub count: usize,
    pub percentage: f64,
    pub examples: Vec<String>,
}

/// The answer to a non-comprehensive question.
#[derive(Debug, Clone, Serialize)]
pub struct QuerySlice {
    pub question: String,
    pub patterns_analyzed: Vec<String>,
    pub results: BTreeMap<String, SliceEntry>,
}

/// Either a focused slice or the full report.
#[derive(Debug, Clone)]
pub enum QueryAnswer {
    Slice(QuerySlice),
    Comprehensive(Box<CorpusReport>),
}

/// Route a free-text question against a finished report.
pub fn route(question: &str, report: &CorpusReport) -> QueryAnswer {
    answer(Question::from_free_text(question), report)
}

/// Answer a canned question against a finished report.
pub fn answer(question: Question, report: &CorpusReport) -> QueryAnswer {
    match question {
        Question::TopicEndTopic => QueryAnswer::Slice(slice(
            report,
            "How many prompts use Topic/EndTopic conventions?",
            Category::ContextBlocks,
            &["topic_end_topic", "topic_lowercase"],
            5,
        )),
        Question::ContextBlocks => QueryAnswer::Slice(slice(
            report,
            "How many prompts use context blocks?",
            Category::ContextBlocks,
            &["topic_end_topic", "topic_lowercase", "context_blocks", "generic_start_end"],
            5,
        )),
        Question::VariablePatterns => QueryAnswer::Slice(slice(
            report,
            "How many prompts use different variable definition patterns?",
            Category::Variables,
            &["curly_braces", "camel_case", "snake_case"],
            5,
        )),
        Question::SectionUsage => QueryAnswer::Slice(slice(
            report,
            "How many prompts use different sections?",
            Category::Sections,
            &["role", "instructions", "general_rules", "variables", "output_format", "context", "rules"],
            0,
        )),
        Question::MarkdownUsage => QueryAnswer::Slice(slice(
            report,
            "How many prompts use markdown formatting?",
            Category::Markdown,
            &["headers", "bold", "italic", "code_blocks", "inline_code", "lists", "numbered_lists"],
            3,
        )),
        Question::AntiHallucination => QueryAnswer::Slice(slice(
            report,
            "How many prompts use anti-hallucination patterns?",
            Category::AntiHallucination,
            &["dont_hallucinate", "no_assumptions", "be_precise", "step_by_step", "follow_formatting"],
            3,
        )),
        Question::Comprehensive => QueryAnswer::Comprehensive(Box::new(report.clone())),
    }
}

fn slice(
    report: &CorpusReport,
    question: &str,
    category: Category,
    conventions: &[&str],
    example_cap: usize,
) -> QuerySlice {
    let usage = report.convention_usage.get(&category);
    let results = conventions
        .iter()
        .map(|name| {
            let entry = usage.and_then(|c| c.get(*name)).copied().unwrap_or_default();
            let examples = if example_cap > 0 {
                report
                    .convention_matches
                    .get(&format!("{}_{}", category.name(), name))
                    .map(|matches| matches.iter().take(example_cap).cloned().collect())
                    .unwrap_or_default()
            } else {
                Vec::new()
            };
            (
                name.to_string(),
                SliceEntry {
                    count: entry.count,
                    percentage: entry.percentage,
                    examples,
                },
            )
        })
        .collect();

    QuerySlice {
        question: question.to_string(),
        patterns_analyzed: conventions.iter().map(|n| n.to_string()).collect(),
        results,
    }
}
