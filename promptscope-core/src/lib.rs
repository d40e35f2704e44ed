//! # promptscope-core
//!
//! Foundation crate for the Promptscope prompt-convention analysis engine.
//! Defines the error taxonomy, signal-threshold configuration, and shared
//! collection types. The analysis crate depends on this.

pub mod config;
pub mod errors;
pub mod telemetry;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::SignalConfig;
pub use errors::error_code::PromptscopeErrorCode;
pub use errors::CorpusError;
pub use types::collections::{FxHashMap, FxHashSet};
