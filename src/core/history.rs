//! Transition log for the machine.
//!
//! An in-memory, append-only record of state transitions over time. The
//! log is observability for one process run, not persistence: nothing is
//! written anywhere.

use super::state::MachineState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Record of a single state transition.
///
/// Records are immutable values describing a move from one state to
/// another at a specific point in time, tagged with the command that
/// caused it and the transaction it belonged to.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state being left.
    pub from: MachineState,
    /// The state being entered.
    pub to: MachineState,
    /// Name of the command that caused the transition.
    pub command: String,
    /// The transaction the transition belonged to, if one was open.
    pub transaction: Option<Uuid>,
    /// When the transition occurred.
    pub timestamp: DateTime<Utc>,
}

/// Ordered, append-only log of transitions.
///
/// Recording returns a new log rather than mutating in place, so a caller
/// holding a snapshot never observes later appends.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use vendo::core::{MachineState, TransitionLog, TransitionRecord};
///
/// let log = TransitionLog::new();
///
/// let log = log.record(TransitionRecord {
///     from: MachineState::Idle,
///     to: MachineState::AwaitingPayment,
///     command: "select".to_string(),
///     transaction: None,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.len(), 1);
/// assert_eq!(
///     log.path(),
///     vec![MachineState::Idle, MachineState::AwaitingPayment],
/// );
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitionLog {
    records: Vec<TransitionRecord>,
}

impl TransitionLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new log.
    ///
    /// The existing log is left unchanged.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// All recorded transitions in order.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    /// The most recent transition, if any.
    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.last()
    }

    /// The path of states traversed: the first record's `from` state, then
    /// the `to` state of every record.
    pub fn path(&self) -> Vec<MachineState> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from);
        }
        for record in &self.records {
            path.push(record.to);
        }
        path
    }

    /// Total duration from first to last transition.
    ///
    /// `None` when the log is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_at(from: MachineState, to: MachineState) -> TransitionRecord {
        TransitionRecord {
            from,
            to,
            command: "test".to_string(),
            transaction: None,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn log_preserves_order() {
        let log = TransitionLog::new()
            .record(record_at(MachineState::Idle, MachineState::AwaitingPayment))
            .record(record_at(
                MachineState::AwaitingPayment,
                MachineState::Dispensing,
            ));

        assert_eq!(
            log.path(),
            vec![
                MachineState::Idle,
                MachineState::AwaitingPayment,
                MachineState::Dispensing,
            ],
        );
    }

    #[test]
    fn record_leaves_original_unchanged() {
        let log = TransitionLog::new();
        let appended = log.record(record_at(MachineState::Idle, MachineState::AwaitingPayment));

        assert!(log.is_empty());
        assert_eq!(appended.len(), 1);
    }

    #[test]
    fn last_returns_most_recent_record() {
        let log = TransitionLog::new()
            .record(record_at(MachineState::Idle, MachineState::AwaitingPayment))
            .record(record_at(
                MachineState::AwaitingPayment,
                MachineState::Dispensing,
            ));

        let last = log.last().unwrap();
        assert_eq!(last.to, MachineState::Dispensing);
    }

    #[test]
    fn empty_log_has_no_path_or_duration() {
        let log = TransitionLog::new();
        assert!(log.path().is_empty());
        assert!(log.duration().is_none());
        assert!(log.last().is_none());
    }

    #[test]
    fn duration_spans_first_to_last() {
        let log = TransitionLog::new()
            .record(record_at(MachineState::Idle, MachineState::AwaitingPayment))
            .record(record_at(
                MachineState::AwaitingPayment,
                MachineState::Dispensing,
            ));

        assert!(log.duration().is_some());
    }

    #[test]
    fn log_serializes_correctly() {
        let log =
            TransitionLog::new().record(record_at(MachineState::Idle, MachineState::AwaitingPayment));

        let json = serde_json::to_string(&log).unwrap();
        let deserialized: TransitionLog = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), log.len());
        assert_eq!(deserialized.path(), log.path());
    }
}
