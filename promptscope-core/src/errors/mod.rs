//! Error taxonomy.
//!
//! Only corpus-level problems surface as errors. Pattern-level failures
//! (a convention whose expression does not compile, or a user search
//! pattern that errors at match time) are isolated where they occur and
//! degrade to zero matches instead of propagating.

pub mod corpus_error;
pub mod error_code;

pub use corpus_error::CorpusError;
