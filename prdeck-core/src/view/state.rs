//! Fetch lifecycle of a view

/// Lifecycle of data a view is waiting on
///
/// The three states are mutually exclusive: a view is loading until its
/// single fetch completes, then it is either ready or failed for good.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    /// Fetch outstanding
    Loading,
    /// Fetch succeeded
    Ready(T),
    /// Fetch failed with a human-readable message
    Error(String),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Loading
    }
}

impl<T> ViewState<T> {
    /// Collapse a fetch result into a terminal state
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => ViewState::Ready(data),
            Err(e) => ViewState::Error(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ViewState::Ready(_))
    }

    /// The data, if ready
    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// The error message, if failed
    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_loading() {
        let state: ViewState<u32> = ViewState::default();
        assert!(state.is_loading());
        assert!(state.data().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_from_result() {
        let ok: ViewState<u32> = ViewState::from_result(Ok::<_, String>(3));
        assert_eq!(ok.data(), Some(&3));
        assert!(ok.is_ready());

        let err: ViewState<u32> =
            ViewState::from_result(Err::<u32, _>("Failed to fetch: 401 Unauthorized"));
        assert_eq!(err.error(), Some("Failed to fetch: 401 Unauthorized"));
        assert!(!err.is_ready());
    }
}
