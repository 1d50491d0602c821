//! Navigation history tracking.
//!
//! Records the most recent changes of the active step together with what
//! caused them. History is kept in memory only and holds at most
//! `capacity` records; older ones are dropped as new ones arrive.

use super::step::StepId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Records kept when no capacity is configured.
pub const DEFAULT_HISTORY_CAPACITY: usize = 256;

/// What caused a change of the active step.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Direct API call or translated user input on this viewer.
    Local,
    /// A goto event delivered by the shared channel.
    Remote,
    /// The address-bar fragment was changed from outside.
    Fragment,
}

/// Record of a single navigation.
///
/// # Example
///
/// ```rust
/// use stepsync::core::{NavigationRecord, Origin, StepId};
/// use chrono::Utc;
///
/// let record = NavigationRecord {
///     from: None,
///     to: StepId::new("intro"),
///     origin: Origin::Local,
///     duration: Some(0),
///     timestamp: Utc::now(),
/// };
/// assert!(record.from.is_none());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NavigationRecord {
    /// Active step before the navigation, `None` on the first one
    pub from: Option<StepId>,
    /// Active step after the navigation
    pub to: StepId,
    /// What triggered the navigation
    pub origin: Origin,
    /// Transition duration handed to the host, in milliseconds
    pub duration: Option<u64>,
    /// When the navigation happened
    pub timestamp: DateTime<Utc>,
}

/// Bounded, ordered history of navigations.
///
/// `record` appends in place. Once `capacity` records are held, each new
/// record evicts the oldest one. A capacity of zero records nothing.
///
/// # Example
///
/// ```rust
/// use stepsync::core::{NavigationHistory, NavigationRecord, Origin, StepId};
/// use chrono::Utc;
///
/// let mut history = NavigationHistory::with_capacity(2);
/// for (from, to) in [(None, "a"), (Some("a"), "b"), (Some("b"), "c")] {
///     history.record(NavigationRecord {
///         from: from.map(StepId::new),
///         to: StepId::new(to),
///         origin: Origin::Local,
///         duration: None,
///         timestamp: Utc::now(),
///     });
/// }
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.get_path(), vec!["a", "b", "c"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NavigationHistory {
    records: VecDeque<NavigationRecord>,
    capacity: usize,
}

impl Default for NavigationHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
            capacity,
        }
    }

    /// Append a navigation, evicting the oldest record when full.
    pub fn record(&mut self, record: NavigationRecord) {
        if self.capacity == 0 {
            return;
        }
        while self.records.len() >= self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    /// Steps visited, in order.
    ///
    /// Starts with the `from` step of the oldest kept record when there was
    /// one, followed by the `to` step of every kept record.
    pub fn get_path(&self) -> Vec<&StepId> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(from) = self.records.front().and_then(|r| r.from.as_ref()) {
            path.push(from);
        }
        path.extend(self.records.iter().map(|r| &r.to));
        path
    }

    /// Time between the oldest and the newest kept navigation.
    pub fn elapsed(&self) -> Option<Duration> {
        let (first, last) = (self.records.front()?, self.records.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Number of kept navigations with the given origin.
    pub fn count(&self, origin: Origin) -> usize {
        self.records.iter().filter(|r| r.origin == origin).count()
    }

    /// Kept records, oldest first.
    pub fn records(&self) -> impl Iterator<Item = &NavigationRecord> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&NavigationRecord> {
        self.records.back()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(from: Option<&str>, to: &str, origin: Origin) -> NavigationRecord {
        NavigationRecord {
            from: from.map(StepId::new),
            to: StepId::new(to),
            origin,
            duration: None,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = NavigationHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.elapsed().is_none());
        assert!(history.last().is_none());
    }

    fn history_of(capacity: usize, records: Vec<NavigationRecord>) -> NavigationHistory {
        let mut history = NavigationHistory::with_capacity(capacity);
        for r in records {
            history.record(r);
        }
        history
    }

    #[test]
    fn record_appends_in_place() {
        let mut history = NavigationHistory::new();
        history.record(record(None, "a", Origin::Local));

        assert_eq!(history.len(), 1);
        assert_eq!(history.last().unwrap().to, "a");
    }

    #[test]
    fn oldest_records_are_evicted_at_capacity() {
        let mut history = NavigationHistory::with_capacity(3);
        let mut from: Option<String> = None;
        for k in 0..10 {
            let to = format!("s{k}");
            history.record(record(from.as_deref(), &to, Origin::Local));
            from = Some(to);
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.capacity(), 3);
        assert_eq!(history.get_path(), vec!["s6", "s7", "s8", "s9"]);
        assert_eq!(history.records().next().unwrap().to, "s7");
    }

    #[test]
    fn zero_capacity_records_nothing() {
        let history = history_of(0, vec![record(None, "a", Origin::Local)]);
        assert!(history.is_empty());
    }

    #[test]
    fn path_starts_from_first_known_step() {
        let history = history_of(
            8,
            vec![
                record(Some("a"), "b", Origin::Local),
                record(Some("b"), "c", Origin::Remote),
            ],
        );

        assert_eq!(history.get_path(), vec!["a", "b", "c"]);
    }

    #[test]
    fn path_skips_unset_start() {
        let history = history_of(
            8,
            vec![
                record(None, "a", Origin::Local),
                record(Some("a"), "b", Origin::Local),
            ],
        );

        assert_eq!(history.get_path(), vec!["a", "b"]);
    }

    #[test]
    fn count_filters_by_origin() {
        let history = history_of(
            8,
            vec![
                record(None, "a", Origin::Local),
                record(Some("a"), "b", Origin::Remote),
                record(Some("b"), "c", Origin::Remote),
                record(Some("c"), "a", Origin::Fragment),
            ],
        );

        assert_eq!(history.count(Origin::Local), 1);
        assert_eq!(history.count(Origin::Remote), 2);
        assert_eq!(history.count(Origin::Fragment), 1);
    }

    #[test]
    fn single_record_has_zero_elapsed() {
        let history = history_of(8, vec![record(None, "a", Origin::Local)]);
        assert_eq!(history.elapsed(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn origin_serializes_in_snake_case() {
        let json = serde_json::to_string(&Origin::Fragment).unwrap();
        assert_eq!(json, "\"fragment\"");
    }
}
