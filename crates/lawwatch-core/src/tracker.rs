//! In-memory tracking of the newest acknowledged law timestamp.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("unparseable created_at {value:?}: {source}")]
    Parse {
        value: String,
        source: chrono::ParseError,
    },
}

/// Tracks the creation time of the most recently acknowledged law.
///
/// Held only in memory by the worker; a restart starts fresh and treats the
/// first law it sees as new.
#[derive(Debug, Default)]
pub struct UpdateTracker {
    last_seen: Option<DateTime<Utc>>,
}

impl UpdateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_seen(&self) -> Option<DateTime<Utc>> {
        self.last_seen
    }

    /// Observe the newest law's `created_at`.
    ///
    /// Returns `true` and records the timestamp when it is strictly newer
    /// than the last-seen value, or when nothing has been seen yet. On
    /// `false` or on a parse error, last-seen is unchanged.
    pub fn observe(&mut self, created_at: &str) -> Result<bool, TimestampError> {
        let ts = parse_created_at(created_at)?;
        match self.last_seen {
            Some(seen) if ts <= seen => Ok(false),
            _ => {
                self.last_seen = Some(ts);
                Ok(true)
            }
        }
    }
}

/// Parse an ISO 8601 `created_at` string into a UTC timestamp.
pub fn parse_created_at(value: &str) -> Result<DateTime<Utc>, TimestampError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| TimestampError::Parse {
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_observation_is_new() {
        let mut tracker = UpdateTracker::new();
        assert!(tracker.observe("2024-01-01T00:00:00Z").unwrap());
        assert_eq!(
            tracker.last_seen(),
            Some(parse_created_at("2024-01-01T00:00:00Z").unwrap())
        );
    }

    #[test]
    fn same_timestamp_is_not_new() {
        let mut tracker = UpdateTracker::new();
        assert!(tracker.observe("2024-01-01T00:00:00Z").unwrap());
        assert!(!tracker.observe("2024-01-01T00:00:00Z").unwrap());
        assert_eq!(
            tracker.last_seen(),
            Some(parse_created_at("2024-01-01T00:00:00Z").unwrap())
        );
    }

    #[test]
    fn strictly_newer_advances_last_seen() {
        let mut tracker = UpdateTracker::new();
        assert!(tracker.observe("2024-01-01T00:00:00Z").unwrap());
        assert!(tracker.observe("2024-01-01T00:00:01Z").unwrap());
        assert_eq!(
            tracker.last_seen(),
            Some(parse_created_at("2024-01-01T00:00:01Z").unwrap())
        );
    }

    #[test]
    fn older_timestamp_is_not_new() {
        let mut tracker = UpdateTracker::new();
        assert!(tracker.observe("2024-06-01T00:00:00Z").unwrap());
        assert!(!tracker.observe("2024-01-01T00:00:00Z").unwrap());
        assert_eq!(
            tracker.last_seen(),
            Some(parse_created_at("2024-06-01T00:00:00Z").unwrap())
        );
    }

    #[test]
    fn parse_error_leaves_last_seen_unchanged() {
        let mut tracker = UpdateTracker::new();
        assert!(tracker.observe("2024-01-01T00:00:00Z").unwrap());
        assert!(tracker.observe("not a timestamp").is_err());
        assert_eq!(
            tracker.last_seen(),
            Some(parse_created_at("2024-01-01T00:00:00Z").unwrap())
        );
    }

    #[test]
    fn offset_timestamps_compare_in_utc() {
        let mut tracker = UpdateTracker::new();
        assert!(tracker.observe("2024-01-01T12:00:00+02:00").unwrap());
        // Same instant expressed in UTC.
        assert!(!tracker.observe("2024-01-01T10:00:00Z").unwrap());
    }

    #[test]
    fn surrounding_whitespace_tolerated() {
        assert!(parse_created_at(" 2024-01-01T00:00:00Z ").is_ok());
    }
}
