//! Error types for reading search results

use thiserror::Error;

/// Error returned when a [`SearchResult`](super::SearchResult) is asked for
/// something the search never reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The queried state was never discovered by the search
    #[error("State was not reached by the search")]
    StateNotReached,
    /// The search ended without popping a goal state
    #[error("No path to a goal state was found")]
    NoPathFound,
}
