//! Pattern matching with per-pattern failure isolation.
//!
//! Every convention pattern compiles here, and every failure mode — an
//! invalid expression, an oversized compilation, a backreference the regex
//! engine cannot express — degrades to zero matches for that one pattern.
//! Matching never returns an error and never panics.

use regex::{Regex, RegexBuilder};

use crate::catalog::types::PatternSpec;

/// Compiled size bound so a pathological expression fails compilation
/// instead of ballooning memory.
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Compiled form of a convention pattern.
#[derive(Debug)]
pub enum CompiledPattern {
    /// A plain regex, compiled case-insensitive, multiline,
    /// dot-matches-newline.
    Plain(Regex),
    /// Open-tag regex plus a close-tag scan binding the captured name.
    Paired { open: Regex, close: CloseStyle },
    /// Compilation failed; always yields zero matches.
    Invalid,
}

/// The close form a paired open tag must be followed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseStyle {
    /// `<NameStart>` closes with `</NameEnd>`; both sides case-insensitive.
    StartEnd,
    /// `<Name>` closes with `</Name>` or `<EndName>`; the name is matched
    /// case-sensitively, the `End` prefix is not.
    TagOrEndTag,
}

impl CloseStyle {
    fn closes(self, rest: &str, name: &str) -> bool {
        match self {
            CloseStyle::StartEnd => {
                let needle = format!("</{}end>", name.to_ascii_lowercase());
                rest.to_ascii_lowercase().contains(&needle)
            }
            CloseStyle::TagOrEndTag => {
                rest.contains(&format!("</{name}>"))
                    || rest.contains(&format!("<End{name}>"))
                    || rest.contains(&format!("<end{name}>"))
            }
        }
    }
}

/// Compile a pattern spec. Failures map to [`CompiledPattern::Invalid`].
pub fn compile(spec: &PatternSpec) -> CompiledPattern {
    match spec {
        PatternSpec::Regex(pattern) => RegexBuilder::new(pattern)
            .case_insensitive(true)
            .multi_line(true)
            .dot_matches_new_line(true)
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()
            .map(CompiledPattern::Plain)
            .unwrap_or(CompiledPattern::Invalid),
        PatternSpec::StartEndPair { open } => RegexBuilder::new(open)
            .case_insensitive(true)
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()
            .map(|open| CompiledPattern::Paired {
                open,
                close: CloseStyle::StartEnd,
            })
            .unwrap_or(CompiledPattern::Invalid),
    }
}

impl CompiledPattern {
    /// The discovery pattern for arbitrary tag pairs: any `<Tag>` followed
    /// by `</Tag>` or `<EndTag>` later in the text.
    pub(crate) fn tag_discovery() -> CompiledPattern {
        RegexBuilder::new(r"<([A-Za-z][A-Za-z0-9]*)>")
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()
            .map(|open| CompiledPattern::Paired {
                open,
                close: CloseStyle::TagOrEndTag,
            })
            .unwrap_or(CompiledPattern::Invalid)
    }

    /// All matches in `text`, in appearance order.
    ///
    /// With capture groups, each match contributes its first non-empty
    /// captured group; otherwise the full match text. Paired patterns
    /// contribute the bound tag name per satisfied open tag.
    pub fn find_matches(&self, text: &str) -> Vec<String> {
        match self {
            CompiledPattern::Plain(re) => find_plain(re, text),
            CompiledPattern::Paired { open, close } => find_pairs(open, *close, text),
            CompiledPattern::Invalid => Vec::new(),
        }
    }
}

fn find_plain(re: &Regex, text: &str) -> Vec<String> {
    re.captures_iter(text)
        .map(|caps| {
            let bound = (1..caps.len())
                .filter_map(|i| caps.get(i))
                .find(|m| !m.as_str().is_empty());
            match bound {
                Some(m) => m.as_str().to_string(),
                None => caps.get(0).map(|m| m.as_str().to_string()).unwrap_or_default(),
            }
        })
        .collect()
}

fn find_pairs(open: &Regex, close: CloseStyle, text: &str) -> Vec<String> {
    let mut names = Vec::new();
    for caps in open.captures_iter(text) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if close.closes(&text[whole.end()..], name.as_str()) {
            names.push(name.as_str().to_string());
        }
    }
    names
}
