//! Discovery of structures that are not pre-registered in the catalog.

pub mod discoverer;
mod naming;
pub mod types;

pub use discoverer::DynamicPatternDiscoverer;
pub use types::{DiscoveredPatterns, NamingStyle, VariableSyntax};
