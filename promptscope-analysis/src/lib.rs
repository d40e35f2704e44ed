//! # promptscope-analysis
//!
//! Analysis engine for the Promptscope prompt-convention auditing tool.
//! Contains the corpus model, convention catalog, pattern matcher,
//! per-prompt analyzer, dynamic pattern discovery, corpus aggregation,
//! and query routing.
//!
//! Presentation layers (CLI menus, dashboards, desktop shells) are external
//! collaborators: they source a [`corpus::Corpus`], run
//! [`aggregation::CorpusAggregator::analyze`], and render the resulting
//! [`aggregation::CorpusReport`].

pub mod aggregation;
pub mod catalog;
pub mod corpus;
pub mod discovery;
pub mod engine;
pub mod query;

pub use aggregation::{CorpusAggregator, CorpusReport};
pub use catalog::{Category, ConventionCatalog};
pub use corpus::{Corpus, PromptRecord};
pub use discovery::DynamicPatternDiscoverer;
pub use engine::SinglePromptAnalyzer;
