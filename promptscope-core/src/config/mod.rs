//! Engine configuration.

pub mod signal_config;

pub use signal_config::{
    BestPracticeThresholds, IssueThresholds, RecommendationThresholds, SignalConfig,
};
