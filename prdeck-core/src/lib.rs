//! prdeck core - Query filter engine and view state
//!
//! This crate holds everything that does not talk to GitHub: the record
//! model, the GitHub-style search query parser and evaluator, derived
//! counts and selections, the list view lifecycle, and configuration.

pub mod config;
pub mod error;
pub mod identity;
pub mod query;
pub mod record;
pub mod secrets;
pub mod time;
pub mod view;

pub use config::{Config, ListSource};
pub use error::{Error, Result};
pub use identity::Viewer;
pub use query::{filter, matches, parse_query, ParsedQuery, SortOrder};
pub use record::{Label, Record, RecordState};
pub use secrets::Secrets;
pub use time::format_relative;
pub use view::{Counts, PullListView, RecordSource, Selection, ViewState};
