//! Scoreboard Core - Immutable player score entries
//!
//! This crate provides the fundamental value type for arcade-style
//! score tables:
//! - [`ScoreEntry`] pairs a player's name with an integer score
//! - Rendering truncates the name to its first three characters
//! - Optional serde support behind the `serde` feature
//!
//! Entries are plain immutable values: construct them, read them, sort
//! them, print them. Ranking, persistence, and any validation policy
//! belong to the consumer.

pub mod entry;
pub mod error;

pub use entry::ScoreEntry;
pub use error::ParseEntryError;
