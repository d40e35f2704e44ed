//! Hash collection aliases.
//!
//! FxHash is faster than SipHash for the short string keys used throughout
//! the engine (convention names, tag names, group keys). These maps are
//! internal accumulator state; serialized report types use `BTreeMap` so
//! output key order stays deterministic.

pub use rustc_hash::{FxHashMap, FxHashSet};
