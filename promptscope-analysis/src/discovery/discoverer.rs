//! Dynamic pattern discovery.
//!
//! Finds recurring structures that are NOT pre-registered in the catalog:
//! whatever tag pairs, `@` tags, variable interpolations, and section
//! headers actually appear in a prompt, plus the naming styles its
//! variables follow.

use regex::{Regex, RegexBuilder};

use crate::engine::matcher::CompiledPattern;

use super::naming::NamingClassifier;
use super::types::{DiscoveredPatterns, VariableSyntax};

/// Scans one record's text for unregistered structures.
#[derive(Debug)]
pub struct DynamicPatternDiscoverer {
    tag_pairs: CompiledPattern,
    at_tag: Option<Regex>,
    header: Option<Regex>,
    bare_token: Option<Regex>,
    variables: Vec<(VariableSyntax, Option<Regex>)>,
    naming: NamingClassifier,
}

impl DynamicPatternDiscoverer {
    pub fn new() -> Self {
        // Fixed priority order; families are reported independently, so a
        // name matching several syntaxes lands in each of their buckets.
        let variables = vec![
            (VariableSyntax::DoubleBraces, compile(r"\{\{([^}]+)\}\}")),
            (VariableSyntax::AtSymbol, compile(r"@([a-zA-Z][a-zA-Z0-9_]*)")),
            (VariableSyntax::TripleTicks, compile(r"```\{([^}]+)\}```")),
            (VariableSyntax::DoubleBrackets, compile(r"\[\[([^\]]+)\]\]")),
            (VariableSyntax::XmlStyle, compile(r"<([^>]+)>")),
        ];

        Self {
            tag_pairs: CompiledPattern::tag_discovery(),
            at_tag: compile(r"@[a-zA-Z][a-zA-Z0-9_]*"),
            header: compile_multiline(r"^#+\s+(.+)$"),
            bare_token: compile(r"\b[A-Za-z][A-Za-z0-9_]*\b"),
            variables,
            naming: NamingClassifier::new(),
        }
    }

    /// Discover all unregistered structures in one text.
    pub fn discover(&self, text: &str) -> DiscoveredPatterns {
        let mut patterns = DiscoveredPatterns::default();

        for tag in self.tag_pairs.find_matches(text) {
            if !patterns.xml_tags.contains(&tag) {
                patterns.xml_tags.push(tag);
            }
        }

        for token in find_all(&self.at_tag, text) {
            if !patterns.at_tags.contains(&token) {
                patterns.at_tags.push(token);
            }
        }

        for (syntax, pattern) in &self.variables {
            let names = capture_all(pattern, text);
            if !names.is_empty() {
                patterns.variables.entry(*syntax).or_default().extend(names);
            }
        }

        for header in capture_all(&self.header, text) {
            patterns.section_headers.push(header.trim().to_string());
        }

        for names in patterns.variables.values() {
            for name in names {
                if let Some(style) = self.naming.classify(name) {
                    patterns.naming_conventions.insert(style);
                }
            }
        }

        // Compound identifiers in free text (an internal capital or an
        // underscore) also reveal a naming style, even when they are not
        // wrapped in any interpolation syntax.
        for token in find_all(&self.bare_token, text) {
            if !is_compound(&token) {
                continue;
            }
            if let Some(style) = self.naming.classify(&token) {
                patterns.naming_conventions.insert(style);
            }
        }

        patterns
    }
}

impl Default for DynamicPatternDiscoverer {
    fn default() -> Self {
        Self::new()
    }
}

fn is_compound(token: &str) -> bool {
    token.contains('_') || token.chars().skip(1).any(|c| c.is_ascii_uppercase())
}

fn compile(pattern: &str) -> Option<Regex> {
    Regex::new(pattern).ok()
}

fn compile_multiline(pattern: &str) -> Option<Regex> {
    RegexBuilder::new(pattern).multi_line(true).build().ok()
}

fn find_all(re: &Option<Regex>, text: &str) -> Vec<String> {
    re.as_ref()
        .map(|re| re.find_iter(text).map(|m| m.as_str().to_string()).collect())
        .unwrap_or_default()
}

fn capture_all(re: &Option<Regex>, text: &str) -> Vec<String> {
    re.as_ref()
        .map(|re| {
            re.captures_iter(text)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
                .collect()
        })
        .unwrap_or_default()
}
