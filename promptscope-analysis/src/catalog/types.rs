//! Convention catalog types.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Fixed convention categories, in reporting order.
///
/// The weight is the maximum contribution of the category to a prompt's
/// compliance score, regardless of how many conventions within it match.
/// Weights sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    ContextBlocks,
    TopicTags,
    Variables,
    Sections,
    AntiHallucination,
    Markdown,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::ContextBlocks,
        Category::TopicTags,
        Category::Variables,
        Category::Sections,
        Category::AntiHallucination,
        Category::Markdown,
    ];

    /// Maximum compliance-score contribution of this category.
    pub fn weight(self) -> u32 {
        match self {
            Category::ContextBlocks => 25,
            Category::TopicTags => 15,
            Category::Variables => 20,
            Category::Sections => 25,
            Category::AntiHallucination => 10,
            Category::Markdown => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::ContextBlocks => "context_blocks",
            Category::TopicTags => "topic_tags",
            Category::Variables => "variables",
            Category::Sections => "sections",
            Category::AntiHallucination => "anti_hallucination",
            Category::Markdown => "markdown",
        }
    }
}

/// How a convention matches text.
#[derive(Debug, Clone)]
pub enum PatternSpec {
    /// A regular expression, compiled case-insensitive, multiline, and
    /// dot-matches-newline.
    Regex(&'static str),
    /// An open tag whose captured name must reappear in a `</NameEnd>`
    /// close tag later in the text (`<DataStart>…</DataEnd>`). Expressed
    /// separately because the regex engine is backreference-free.
    StartEndPair {
        /// Open-tag expression with the name as capture group 1.
        open: &'static str,
    },
}

/// A named, pre-registered structural convention.
#[derive(Debug, Clone)]
pub struct ConventionDefinition {
    /// Unique key within the category.
    pub name: &'static str,
    pub category: Category,
    pub spec: PatternSpec,
    pub description: &'static str,
    pub examples: SmallVec<[&'static str; 2]>,
}
