//! Error types for scoreboard-core

use thiserror::Error;

/// Error when parsing a [`ScoreEntry`](crate::ScoreEntry) from its
/// rendered `"name: score"` form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseEntryError {
    /// The input contains no `": "` separator.
    #[error("missing ': ' separator in '{input}'")]
    MissingSeparator {
        /// The full input that failed to parse.
        input: String,
    },

    /// The part after the separator is not a base-10 integer.
    #[error("invalid score '{value}': {source}")]
    InvalidScore {
        /// The score part as it appeared in the input.
        value: String,
        /// The underlying integer parse failure.
        source: std::num::ParseIntError,
    },
}
