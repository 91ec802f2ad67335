//! ScoreEntry - An immutable name/score pair

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseEntryError;

/// A player's display name paired with their score.
///
/// Entries are immutable once constructed, and construction applies no
/// validation: empty names, negative scores, and arbitrary Unicode are
/// all stored unchanged.
///
/// The `Display` rendering cuts the name down to its first three
/// characters, like the initials on an old arcade high-score table.
///
/// # Examples
///
/// ```
/// use scoreboard_core::ScoreEntry;
///
/// let entry = ScoreEntry::new("Alexandra", 950);
///
/// assert_eq!(entry.name(), "Alexandra");
/// assert_eq!(entry.score(), 950);
/// assert_eq!(entry.to_string(), "Ale: 950");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreEntry {
    name: String,
    score: i64,
}

impl ScoreEntry {
    /// Number of characters the rendered name is cut to.
    pub const DISPLAY_LEN: usize = 3;

    /// Creates a new entry with the given name and score.
    #[inline]
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        ScoreEntry {
            name: name.into(),
            score,
        }
    }

    /// Returns the stored name verbatim.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the stored score verbatim.
    #[inline]
    pub const fn score(&self) -> i64 {
        self.score
    }

    /// Returns the name as the rendering shows it: the first
    /// [`DISPLAY_LEN`](Self::DISPLAY_LEN) characters when the name is at
    /// least that long, the whole name otherwise.
    ///
    /// The cut is a strict character prefix, not word-aware, and always
    /// lands on a character boundary.
    pub fn display_name(&self) -> &str {
        match self.name.char_indices().nth(Self::DISPLAY_LEN) {
            Some((end, _)) => &self.name[..end],
            None => &self.name,
        }
    }
}

impl Ord for ScoreEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.score.cmp(&other.score) {
            Ordering::Equal => self.name.cmp(&other.name),
            other => other,
        }
    }
}

impl PartialOrd for ScoreEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for ScoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScoreEntry({:?}, {})", self.name, self.score)
    }
}

impl fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.display_name(), self.score)
    }
}

impl FromStr for ScoreEntry {
    type Err = ParseEntryError;

    /// Parses the `"name: score"` form produced by `Display`.
    ///
    /// The split happens at the last `": "` occurrence, so names that
    /// themselves contain the separator still parse. A name that was
    /// truncated during rendering stays truncated; the dropped
    /// characters cannot be recovered.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sep = s
            .rfind(": ")
            .ok_or_else(|| ParseEntryError::MissingSeparator {
                input: s.to_string(),
            })?;
        let (name, rest) = (&s[..sep], &s[sep + 2..]);
        let score = rest
            .trim()
            .parse::<i64>()
            .map_err(|e| ParseEntryError::InvalidScore {
                value: rest.to_string(),
                source: e,
            })?;
        Ok(ScoreEntry::new(name, score))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let entry = ScoreEntry::new("Alexandra", 950);
        let json = serde_json::to_string(&entry).unwrap();
        let back: ScoreEntry = serde_json::from_str(&json).unwrap();

        // The full name survives transport; truncation is display-only.
        assert_eq!(back, entry);
        assert_eq!(back.name(), "Alexandra");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&ScoreEntry::new("Bo", 100)).unwrap();
        assert_eq!(json, r#"{"name":"Bo","score":100}"#);
    }
}
