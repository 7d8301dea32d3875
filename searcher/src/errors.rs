use thiserror::Error;

/// Error produced by search problems and search configuration.
///
/// Failing to find a solution is not an error: the search
/// entry points return `None` in that case.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Search problem does not implement {method}")]
    NotImplemented { method: &'static str },

    #[error("Depth must be a non-negative integer or 'inf', got {0:?}")]
    InvalidDepthArgument(String),

    #[error("Illegal action at step {step}")]
    IllegalAction { step: usize },
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
