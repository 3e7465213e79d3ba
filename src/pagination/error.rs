//! Errors raised while building or driving a pagination.

/// Rejected configuration. No pagination is created.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A numeric option did not start with an integer.
    #[error("{field} option is not an integer: {value:?}")]
    InvalidInteger {
        /// Option name.
        field: &'static str,
        /// The rejected text.
        value: String,
    },

    /// A count was zero or negative.
    #[error("{field} option must be at least 1, got {value}")]
    NotPositive {
        /// Option name.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// The start page lies outside `1..=total_pages`.
    #[error("start page {start_page} is outside 1..={total_pages}")]
    InvalidStartPage {
        /// Requested start page.
        start_page: i64,
        /// Configured total.
        total_pages: i64,
    },

    /// The options object could not be deserialized.
    #[error("invalid pagination options: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err.to_string())
    }
}

/// Rejected page request. The pagination keeps its previous state.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    /// The page lies outside `1..=total_pages`.
    #[error("page {page} is outside 1..={total_pages}")]
    OutOfRange {
        /// Requested page.
        page: usize,
        /// Total at the time of the request.
        total_pages: usize,
    },

    /// A total of zero pages was requested.
    #[error("total pages must be at least 1")]
    ZeroTotalPages,
}
