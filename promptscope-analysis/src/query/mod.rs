//! Query surface: canned-question routing and ad hoc corpus search.

pub mod router;
pub mod search;

pub use router::{answer, route, Question, QueryAnswer, QuerySlice, SliceEntry};
pub use search::{regex_search, substring_search, SearchHit, SearchResults};
