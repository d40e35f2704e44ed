//! Discovered-structure types.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// Variable-interpolation syntax families, in discovery priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableSyntax {
    DoubleBraces,
    AtSymbol,
    TripleTicks,
    DoubleBrackets,
    XmlStyle,
}

impl VariableSyntax {
    pub const ALL: [VariableSyntax; 5] = [
        VariableSyntax::DoubleBraces,
        VariableSyntax::AtSymbol,
        VariableSyntax::TripleTicks,
        VariableSyntax::DoubleBrackets,
        VariableSyntax::XmlStyle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            VariableSyntax::DoubleBraces => "double_braces",
            VariableSyntax::AtSymbol => "at_symbol",
            VariableSyntax::TripleTicks => "triple_ticks",
            VariableSyntax::DoubleBrackets => "double_brackets",
            VariableSyntax::XmlStyle => "xml_style",
        }
    }
}

/// Variable naming styles, reported under their conventional labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum NamingStyle {
    #[serde(rename = "camelCase")]
    CamelCase,
    #[serde(rename = "snake_case")]
    SnakeCase,
    #[serde(rename = "UPPER_SNAKE_CASE")]
    UpperSnakeCase,
    #[serde(rename = "PascalCase")]
    PascalCase,
}

impl NamingStyle {
    pub fn label(self) -> &'static str {
        match self {
            NamingStyle::CamelCase => "camelCase",
            NamingStyle::SnakeCase => "snake_case",
            NamingStyle::UpperSnakeCase => "UPPER_SNAKE_CASE",
            NamingStyle::PascalCase => "PascalCase",
        }
    }
}

/// Unregistered structures discovered in one record.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DiscoveredPatterns {
    /// Tag names with a matching close form, deduplicated, first-seen order.
    pub xml_tags: Vec<String>,
    /// `@word` tokens, deduplicated, first-seen order.
    pub at_tags: Vec<String>,
    /// Captured variable names grouped by syntax family. The same name may
    /// appear under several families.
    pub variables: BTreeMap<VariableSyntax, Vec<String>>,
    /// Markdown header texts, trimmed, in line order.
    pub section_headers: Vec<String>,
    /// Distinct naming styles observed in this record.
    pub naming_conventions: BTreeSet<NamingStyle>,
}
