//! List view state
//!
//! A [`PullListView`] owns the fetched records, the query being edited,
//! the selection and the derived counts for one view activation.

mod counts;
mod list;
mod selection;
mod state;

pub use counts::Counts;
pub use list::{PullListView, RecordSource};
pub use selection::Selection;
pub use state::ViewState;
