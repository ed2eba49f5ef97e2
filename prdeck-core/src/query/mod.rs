//! GitHub-style search queries
//!
//! A query such as `is:open author:@me fix login` is parsed once into a
//! [`ParsedQuery`] and then evaluated against every record of a view.

mod parser;
mod predicate;
mod sort;

pub use parser::{parse_query, ParsedQuery};
pub use predicate::{filter, matches};
pub use sort::{SortDirection, SortKey, SortOrder};
