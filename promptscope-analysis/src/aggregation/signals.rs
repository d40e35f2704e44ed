//! Insight signals and threshold-driven findings.
//!
//! A broader presence scan than the catalog: nine coarse signals whose
//! corpus-level percentages feed the quality-issue, best-practice, and
//! recommendation rules. The rules are descriptive threshold comparisons,
//! not part of the compliance-scoring model.

use std::collections::{BTreeMap, BTreeSet};

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use promptscope_core::SignalConfig;

use super::types::ConventionUsage;

/// Coarse per-record presence signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightSignal {
    ContextBlocks,
    RoleDefinitions,
    InstructionSections,
    VariableDefinitions,
    OutputFormats,
    AntiHallucination,
    StepByStep,
    ExamplesProvided,
    ConstraintsDefined,
}

impl InsightSignal {
    pub const ALL: [InsightSignal; 9] = [
        InsightSignal::ContextBlocks,
        InsightSignal::RoleDefinitions,
        InsightSignal::InstructionSections,
        InsightSignal::VariableDefinitions,
        InsightSignal::OutputFormats,
        InsightSignal::AntiHallucination,
        InsightSignal::StepByStep,
        InsightSignal::ExamplesProvided,
        InsightSignal::ConstraintsDefined,
    ];

    pub fn name(self) -> &'static str {
        match self {
            InsightSignal::ContextBlocks => "context_blocks",
            InsightSignal::RoleDefinitions => "role_definitions",
            InsightSignal::InstructionSections => "instruction_sections",
            InsightSignal::VariableDefinitions => "variable_definitions",
            InsightSignal::OutputFormats => "output_formats",
            InsightSignal::AntiHallucination => "anti_hallucination",
            InsightSignal::StepByStep => "step_by_step",
            InsightSignal::ExamplesProvided => "examples_provided",
            InsightSignal::ConstraintsDefined => "constraints_defined",
        }
    }
}

/// Findings derived from the signal percentages.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SignalFindings {
    pub quality_issues: Vec<String>,
    pub best_practices: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Scans one record's text for the nine insight signals.
#[derive(Debug)]
pub struct SignalScanner {
    patterns: Vec<(InsightSignal, Option<Regex>)>,
}

impl SignalScanner {
    pub fn new() -> Self {
        let patterns = vec![
            // Any open/close or open/End-close tag pair, names unchecked.
            (
                InsightSignal::ContextBlocks,
                dotall(r"<[A-Za-z]+>.*?</[A-Za-z]+>|<[A-Za-z]+>.*?<[Ee]nd[A-Za-z]+>"),
            ),
            (
                InsightSignal::RoleDefinitions,
                plain(r"[Rr]ole:|[Yy]ou are|[Aa]s a|[Aa]cting as|[Yy]our role is|[Yy]ou act as|[Yy]ou will be|[Yy]ou serve as"),
            ),
            (InsightSignal::InstructionSections, plain(r"[Ii]nstructions?:|Task:|Objective:")),
            (InsightSignal::VariableDefinitions, plain(r"[Vv]ariables?:|Parameters?:|Input:")),
            (InsightSignal::OutputFormats, plain(r"[Oo]utput [Ff]ormat:|Format:|Response format:")),
            (
                InsightSignal::AntiHallucination,
                insensitive(r"do not hallucinate|do not invent|only use provided|stick to facts"),
            ),
            (
                InsightSignal::StepByStep,
                insensitive(r"step by step|step-by-step|step 1|first|then|finally"),
            ),
            (InsightSignal::ExamplesProvided, plain(r"[Ee]xamples?:|For example|Sample:")),
            (InsightSignal::ConstraintsDefined, plain(r"[Cc]onstraints?:|[Ll]imitations?:|[Rr]ules?:")),
        ];

        Self { patterns }
    }

    /// The set of signals present in `text`.
    pub fn scan(&self, text: &str) -> BTreeSet<InsightSignal> {
        self.patterns
            .iter()
            .filter(|(_, re)| re.as_ref().is_some_and(|re| re.is_match(text)))
            .map(|(signal, _)| *signal)
            .collect()
    }
}

impl Default for SignalScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply the threshold tables to the final signal percentages.
pub fn evaluate(
    usage: &BTreeMap<InsightSignal, ConventionUsage>,
    config: &SignalConfig,
) -> SignalFindings {
    let pct = |signal: InsightSignal| usage.get(&signal).map_or(0.0, |u| u.percentage);
    let mut findings = SignalFindings::default();

    let issues = &config.issues;
    if pct(InsightSignal::AntiHallucination) < issues.effective_anti_hallucination() {
        findings.quality_issues.push(format!(
            "Less than {:.0}% of prompts include anti-hallucination instructions",
            issues.effective_anti_hallucination()
        ));
    }
    if pct(InsightSignal::ExamplesProvided) < issues.effective_examples() {
        findings.quality_issues.push(format!(
            "Less than {:.0}% of prompts provide examples",
            issues.effective_examples()
        ));
    }
    if pct(InsightSignal::StepByStep) < issues.effective_step_by_step() {
        findings.quality_issues.push(format!(
            "Less than {:.0}% of prompts use step-by-step instructions",
            issues.effective_step_by_step()
        ));
    }
    if pct(InsightSignal::ContextBlocks) < issues.effective_structured_tags() {
        findings.quality_issues.push(format!(
            "Less than {:.0}% of prompts use structured XML-style tags",
            issues.effective_structured_tags()
        ));
    }

    let best = &config.best_practices;
    if pct(InsightSignal::RoleDefinitions) > best.effective_role_definitions() {
        findings.best_practices.push(format!(
            "Strong role definition usage (>{:.0}%)",
            best.effective_role_definitions()
        ));
    }
    if pct(InsightSignal::InstructionSections) > best.effective_instruction_sections() {
        findings.best_practices.push(format!(
            "Good instruction section coverage (>{:.0}%)",
            best.effective_instruction_sections()
        ));
    }
    if pct(InsightSignal::ContextBlocks) > best.effective_structured_tags() {
        findings.best_practices.push(format!(
            "Good use of structured XML-style tags (>{:.0}%)",
            best.effective_structured_tags()
        ));
    }

    let rec = &config.recommendations;
    if pct(InsightSignal::AntiHallucination) < rec.effective_anti_hallucination() {
        findings
            .recommendations
            .push("Add anti-hallucination instructions to more prompts".to_string());
    }
    if pct(InsightSignal::ExamplesProvided) < rec.effective_examples() {
        findings
            .recommendations
            .push("Include examples in prompts for better clarity".to_string());
    }
    if pct(InsightSignal::OutputFormats) < rec.effective_output_formats() {
        findings
            .recommendations
            .push("Define output formats more consistently".to_string());
    }
    if pct(InsightSignal::ContextBlocks) < rec.effective_structured_tags() {
        findings
            .recommendations
            .push("Use more structured XML-style tags for better organization".to_string());
    }

    findings
}

fn plain(pattern: &str) -> Option<Regex> {
    Regex::new(pattern).ok()
}

fn dotall(pattern: &str) -> Option<Regex> {
    RegexBuilder::new(pattern).dot_matches_new_line(true).build().ok()
}

fn insensitive(pattern: &str) -> Option<Regex> {
    RegexBuilder::new(pattern).case_insensitive(true).build().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(entries: &[(InsightSignal, f64)]) -> BTreeMap<InsightSignal, ConventionUsage> {
        let mut map = BTreeMap::new();
        for signal in InsightSignal::ALL {
            map.insert(signal, ConventionUsage { count: 0, percentage: 0.0 });
        }
        for (signal, percentage) in entries {
            map.insert(*signal, ConventionUsage { count: 1, percentage: *percentage });
        }
        map
    }

    #[test]
    fn scanner_detects_role_and_tags() {
        let scanner = SignalScanner::new();
        let signals = scanner.scan("You are a helpful agent.\n<Context>\ndata\n</Context>");
        assert!(signals.contains(&InsightSignal::RoleDefinitions));
        assert!(signals.contains(&InsightSignal::ContextBlocks));
        assert!(!signals.contains(&InsightSignal::OutputFormats));
    }

    #[test]
    fn scanner_matches_tag_pairs_across_lines() {
        let scanner = SignalScanner::new();
        let signals = scanner.scan("<Data>\nline one\nline two\n<EndData>");
        assert!(signals.contains(&InsightSignal::ContextBlocks));
    }

    #[test]
    fn low_usage_trips_issues_and_recommendations_independently() {
        let findings = evaluate(
            &usage(&[(InsightSignal::AntiHallucination, 40.0)]),
            &SignalConfig::default(),
        );
        // 40% is above the 30% issue cutoff but below the 50% recommendation
        // cutoff.
        assert!(!findings
            .quality_issues
            .iter()
            .any(|issue| issue.contains("anti-hallucination")));
        assert!(findings
            .recommendations
            .iter()
            .any(|rec| rec.contains("anti-hallucination")));
    }

    #[test]
    fn high_usage_reports_best_practices() {
        let findings = evaluate(
            &usage(&[
                (InsightSignal::RoleDefinitions, 85.0),
                (InsightSignal::ContextBlocks, 75.0),
            ]),
            &SignalConfig::default(),
        );
        assert_eq!(findings.best_practices.len(), 2);
    }
}
