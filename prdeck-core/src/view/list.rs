//! The pull-request list view

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::{Counts, Selection, ViewState};
use crate::identity::Viewer;
use crate::query::{filter, parse_query, ParsedQuery};
use crate::record::Record;
use crate::Result;

/// Where a view gets its records from
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Short description for logs, e.g. `octo/hello issues`
    fn describe(&self) -> String;

    /// Fetch the full record set in one request
    async fn fetch_records(&self) -> Result<Vec<Record>>;
}

/// State behind one activation of the pull-request list
///
/// Records are fetched once and never modified; the visible list is
/// derived from them and the current query on every call.
#[derive(Debug)]
pub struct PullListView {
    viewer: Viewer,
    records: ViewState<Vec<Record>>,
    counts: Counts,
    query_text: String,
    query: ParsedQuery,
    selection: Selection,
}

impl PullListView {
    /// Create an empty view in the loading state
    pub fn new(viewer: Viewer) -> Self {
        Self {
            viewer,
            records: ViewState::Loading,
            counts: Counts::default(),
            query_text: String::new(),
            query: ParsedQuery::default(),
            selection: Selection::new(),
        }
    }

    /// Start with the given query text
    pub fn with_query(mut self, text: impl Into<String>) -> Self {
        self.set_query(text);
        self
    }

    /// Run the view's single fetch against `source`
    pub async fn load(&mut self, source: &dyn RecordSource) {
        self.records = ViewState::Loading;
        debug!(source = %source.describe(), "Loading records");

        let result = source.fetch_records().await;
        self.finish(result);
    }

    /// Settle the view with the outcome of its fetch
    pub fn finish(&mut self, result: Result<Vec<Record>>) {
        self.records = ViewState::from_result(result);

        match &self.records {
            ViewState::Ready(records) => {
                self.counts = Counts::from_records(records);
                info!(
                    records = records.len(),
                    open = self.counts.open,
                    closed = self.counts.closed,
                    "View ready"
                );
            }
            ViewState::Error(message) => {
                self.counts = Counts::default();
                warn!(error = %message, "View failed to load");
            }
            ViewState::Loading => {}
        }

        self.drop_unsupported_sort();
    }

    /// Replace the query text and re-parse it
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query_text = text.into();
        self.query = parse_query(&self.query_text);
        self.drop_unsupported_sort();
    }

    /// Move a `sort:` the loaded records cannot honour into the ignored list
    ///
    /// The pulls listing reports no comment counts, so `sort:comments` would
    /// otherwise silently keep source order.
    fn drop_unsupported_sort(&mut self) {
        let ViewState::Ready(records) = &self.records else {
            return;
        };
        let Some(order) = self.query.sort else {
            return;
        };
        if order.is_supported_by(records) {
            return;
        }

        debug!(sort = %order, "Records carry no value for sort key, ignoring it");
        self.query.sort = None;
        self.query.ignored.push(format!("sort:{}", order));
    }

    /// Query text as entered
    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    /// Parsed form of the current query
    pub fn query(&self) -> &ParsedQuery {
        &self.query
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// Fetch lifecycle and records
    pub fn state(&self) -> &ViewState<Vec<Record>> {
        &self.records
    }

    /// Records matching the current query; empty unless ready
    pub fn visible(&self) -> Vec<&Record> {
        match &self.records {
            ViewState::Ready(records) => filter(records, &self.query, &self.viewer),
            _ => Vec::new(),
        }
    }

    /// Open/closed pull-request counts of the full record set
    pub fn counts(&self) -> Counts {
        self.counts
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn select(&mut self, number: u64) {
        self.selection.select(number);
    }

    pub fn deselect(&mut self, number: u64) {
        self.selection.deselect(number);
    }

    pub fn toggle(&mut self, number: u64) -> bool {
        self.selection.toggle(number)
    }

    /// Select every currently visible record
    pub fn select_all(&mut self) {
        if let ViewState::Ready(records) = &self.records {
            let visible = filter(records, &self.query, &self.viewer);
            self.selection.select_all(visible);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Whether the "select all" checkbox is ticked
    pub fn all_visible_selected(&self) -> bool {
        self.selection.all_selected(&self.visible())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::fixtures::{record, sample};
    use crate::record::RecordState;
    use crate::Error;

    struct FixedSource(Vec<Record>);

    #[async_trait]
    impl RecordSource for FixedSource {
        fn describe(&self) -> String {
            "fixed".to_string()
        }

        async fn fetch_records(&self) -> Result<Vec<Record>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl RecordSource for FailingSource {
        fn describe(&self) -> String {
            "failing".to_string()
        }

        async fn fetch_records(&self) -> Result<Vec<Record>> {
            Err(Error::Fetch("401 Unauthorized".to_string()))
        }
    }

    fn numbers(view: &PullListView) -> Vec<u64> {
        view.visible().iter().map(|r| r.number).collect()
    }

    #[tokio::test]
    async fn test_load_ready() {
        let mut view = PullListView::new(Viewer::new("octocat"));
        assert!(view.state().is_loading());
        assert!(view.visible().is_empty());

        view.load(&FixedSource(sample())).await;

        assert!(view.state().is_ready());
        assert_eq!(numbers(&view), vec![1, 2]);
        assert_eq!(view.counts().total(), 2);
    }

    #[tokio::test]
    async fn test_load_error() {
        let mut view = PullListView::new(Viewer::default());
        view.load(&FailingSource).await;

        assert_eq!(
            view.state().error(),
            Some("Failed to load records: 401 Unauthorized")
        );
        assert!(view.visible().is_empty());
        assert_eq!(view.counts(), Counts::default());
    }

    #[test]
    fn test_counts_ignore_query() {
        let mut view = PullListView::new(Viewer::default()).with_query("is:closed");
        view.finish(Ok(sample()));
        assert_eq!(numbers(&view), vec![2]);
        assert_eq!(view.counts(), Counts { open: 1, closed: 1 });

        view.set_query("is:open");
        assert_eq!(view.counts(), Counts { open: 1, closed: 1 });
    }

    #[test]
    fn test_select_all_then_narrow_query_keeps_selection() {
        let mut view = PullListView::new(Viewer::default());
        view.finish(Ok(sample()));

        view.select_all();
        assert!(view.all_visible_selected());
        assert_eq!(view.selection().iter().collect::<Vec<_>>(), vec![1, 2]);

        view.set_query("is:closed");
        assert_eq!(numbers(&view), vec![2]);
        assert!(view.selection().contains(1));
        assert!(view.all_visible_selected());
    }

    #[test]
    fn test_select_all_covers_only_visible() {
        let mut view = PullListView::new(Viewer::default()).with_query("is:issue");
        view.finish(Ok(sample()));

        view.select_all();
        assert_eq!(view.selection().iter().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_toggle_and_clear() {
        let mut view = PullListView::new(Viewer::default());
        view.finish(Ok(sample()));

        assert!(view.toggle(1));
        assert!(!view.all_visible_selected());
        view.select(2);
        assert!(view.all_visible_selected());
        view.deselect(2);
        assert!(!view.selection().contains(2));

        view.clear_selection();
        assert!(view.selection().is_empty());
    }

    /// Records shaped like the pulls listing, which has no comment counts
    fn pulls_without_comments() -> Vec<Record> {
        let mut records = vec![
            record(5, RecordState::Open, true, "a"),
            record(9, RecordState::Open, true, "b"),
            record(7, RecordState::Closed, true, "c"),
        ];
        for r in &mut records {
            r.comments = None;
        }
        records
    }

    #[test]
    fn test_comment_sort_without_counts_is_reported_ignored() {
        let mut view = PullListView::new(Viewer::default()).with_query("sort:comments");
        assert!(view.query().sort.is_some());

        view.finish(Ok(pulls_without_comments()));

        assert!(view.query().sort.is_none());
        assert_eq!(view.query().ignored, vec!["sort:comments-desc"]);
        assert_eq!(numbers(&view), vec![5, 9, 7]);

        view.set_query("is:open sort:comments-asc");
        assert_eq!(view.query().ignored, vec!["sort:comments-asc"]);
        assert_eq!(numbers(&view), vec![5, 9]);

        view.set_query("sort:created-asc");
        assert!(view.query().ignored.is_empty());
        assert_eq!(numbers(&view), vec![5, 7, 9]);
    }

    #[test]
    fn test_comment_sort_kept_when_counts_present() {
        let mut records = pulls_without_comments();
        records[0].comments = Some(1);
        records[1].comments = Some(4);
        records[2].comments = Some(2);

        let mut view = PullListView::new(Viewer::default()).with_query("sort:comments");
        view.finish(Ok(records));

        assert!(view.query().ignored.is_empty());
        assert_eq!(numbers(&view), vec![9, 7, 5]);
    }

    #[test]
    fn test_select_all_while_loading_is_noop() {
        let mut view = PullListView::new(Viewer::default());
        view.select_all();
        assert!(view.selection().is_empty());
        assert!(!view.all_visible_selected());
    }
}
