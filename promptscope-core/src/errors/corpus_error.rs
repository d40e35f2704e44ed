//! Corpus input errors.

use std::path::PathBuf;

use super::error_code::PromptscopeErrorCode;

/// Errors raised while sourcing a corpus or slicing its results.
///
/// These are the only user-visible failures for a run; everything else is
/// recoverable at record or pattern granularity.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("Failed to read corpus file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse corpus JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unsupported corpus shape: expected an array or object at the top level, found {found}")]
    UnsupportedShape { found: &'static str },

    #[error("No analyzable records in corpus: every record had empty text")]
    NoData,

    #[error("Invalid search pattern {pattern:?}: {message}")]
    InvalidSearchPattern { pattern: String, message: String },
}

impl PromptscopeErrorCode for CorpusError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CORPUS_IO",
            Self::Parse(_) => "CORPUS_PARSE",
            Self::UnsupportedShape { .. } => "CORPUS_UNSUPPORTED_SHAPE",
            Self::NoData => "CORPUS_NO_DATA",
            Self::InvalidSearchPattern { .. } => "QUERY_INVALID_PATTERN",
        }
    }
}
