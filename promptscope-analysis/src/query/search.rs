//! Ad hoc corpus search.
//!
//! Lets a collaborator answer one-off "which prompts mention X" questions
//! without registering a convention. Substring search is case-insensitive;
//! regex search compiles the user's pattern case-insensitive and multiline.
//! A bad user pattern is an input error, never a panic.

use promptscope_core::CorpusError;
use regex::RegexBuilder;
use serde::Serialize;

use crate::corpus::Corpus;

/// Preview length in characters.
const PREVIEW_CHARS: usize = 200;

/// One matching record.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub prompt_id: String,
    pub group_key: String,
    /// Full text length in characters.
    pub length: usize,
    /// The first [`PREVIEW_CHARS`] characters of the text.
    pub preview: String,
}

/// Search outcome.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub hits: Vec<SearchHit>,
}

/// Case-insensitive substring search over extracted texts.
pub fn substring_search(corpus: &Corpus, query: &str) -> SearchResults {
    let needle = query.to_lowercase();
    collect(corpus, |text| text.to_lowercase().contains(&needle))
}

/// Regex search over extracted texts.
pub fn regex_search(corpus: &Corpus, pattern: &str) -> Result<SearchResults, CorpusError> {
    let re = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .map_err(|e| CorpusError::InvalidSearchPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

    Ok(collect(corpus, |text| re.is_match(text)))
}

fn collect(corpus: &Corpus, matches: impl Fn(&str) -> bool) -> SearchResults {
    let mut results = SearchResults::default();
    for record in corpus.records() {
        if !record.has_text() || !matches(&record.text) {
            continue;
        }
        results.count += 1;
        results.hits.push(SearchHit {
            prompt_id: record.id.clone(),
            group_key: record.group_key.clone(),
            length: record.text.chars().count(),
            preview: preview(&record.text),
        });
    }
    results
}

fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(PREVIEW_CHARS).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn corpus() -> Corpus {
        Corpus::from_value(&json!([
            {"id": "a", "prompt": "Summarize the QUARTERLY report.", "workspace_name": "Finance"},
            {"id": "b", "prompt": "Draft a support reply."},
            {"id": "c", "prompt": ""},
        ]))
        .unwrap()
    }

    #[test]
    fn substring_search_is_case_insensitive() {
        let results = substring_search(&corpus(), "quarterly");
        assert_eq!(results.count, 1);
        assert_eq!(results.hits[0].prompt_id, "a");
        assert_eq!(results.hits[0].group_key, "Finance");
    }

    #[test]
    fn regex_search_matches_patterns() {
        let results = regex_search(&corpus(), r"support\s+reply").unwrap();
        assert_eq!(results.count, 1);
        assert_eq!(results.hits[0].prompt_id, "b");
    }

    #[test]
    fn invalid_regex_is_an_input_error() {
        let err = regex_search(&corpus(), "[unclosed").unwrap_err();
        assert!(matches!(err, CorpusError::InvalidSearchPattern { .. }));
    }

    #[test]
    fn empty_text_records_never_match() {
        let results = substring_search(&corpus(), "");
        assert_eq!(results.count, 2, "empty query matches all non-empty records");
    }

    #[test]
    fn previews_are_bounded() {
        let long = "y".repeat(500);
        let corpus = Corpus::from_value(&json!([{"prompt": long}])).unwrap();
        let results = substring_search(&corpus, "y");
        assert_eq!(results.hits[0].preview.chars().count(), 203);
        assert!(results.hits[0].preview.ends_with("..."));
        assert_eq!(results.hits[0].length, 500);
    }
}
