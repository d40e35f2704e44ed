//! Corpus-level aggregation: counters, percentages, and quality signals.

pub mod aggregator;
pub mod complexity;
pub mod report;
pub mod signals;
pub mod types;

pub use aggregator::CorpusAggregator;
pub use report::{CorpusReport, GroupReport, ReportSummary};
pub use signals::{InsightSignal, SignalFindings, SignalScanner};
pub use types::{ComplexityMetrics, ConventionUsage, DiscoverySummary, GroupProfile};
