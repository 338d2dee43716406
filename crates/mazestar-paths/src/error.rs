use crate::engine::SearchState;

/// Misuse of the search engine.
///
/// An unreachable goal is not an error: it ends the search in
/// [`SearchState::Exhausted`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// A path was requested before the goal was reached.
    #[error("cannot reconstruct a path while the search is {state:?}")]
    ReconstructBeforeFound { state: SearchState },
}
