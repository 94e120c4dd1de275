//! Audit support for host applications.
//!
//! The core never records anything itself; hosts that want an activity
//! trail construct an [`AuditEvent`] from a finished analysis and pass it
//! to an injected [`AuditSink`]. The event's canonical rendering is
//! `"<timestamp> - <description>: <result>"`.
//!
//! # Examples
//!
//! ```
//! use textalyzer::audit::{AuditEvent, AuditSink, MemoryAuditSink};
//!
//! let sink = MemoryAuditSink::new();
//! sink.record(AuditEvent::new("Sentence Count Result", "3"));
//!
//! assert_eq!(sink.len(), 1);
//! ```

use std::fmt;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single audit record: when an analysis ran, what it was, what it found.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// When the event occurred
    pub timestamp: DateTime<Utc>,

    /// Human-readable description of the operation
    pub description: String,

    /// Canonical rendering of the analysis result
    pub result: String,
}

impl AuditEvent {
    /// Create a new audit event stamped with the current time.
    pub fn new<D: Into<String>, R: Into<String>>(description: D, result: R) -> Self {
        Self::at(Utc::now(), description, result)
    }

    /// Create a new audit event with an explicit timestamp.
    pub fn at<D: Into<String>, R: Into<String>>(
        timestamp: DateTime<Utc>,
        description: D,
        result: R,
    ) -> Self {
        AuditEvent {
            timestamp,
            description: description.into(),
            result: result.into(),
        }
    }
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.description,
            self.result
        )
    }
}

/// Trait for injected audit sinks.
///
/// Implementations decide where events go (memory, a file, a database);
/// the core only defines the capability boundary.
pub trait AuditSink: Send + Sync {
    /// Record one audit event.
    fn record(&self, event: AuditEvent);
}

/// An audit sink that keeps events in memory.
///
/// Useful for tests and for hosts that flush events themselves.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    events: Mutex<Vec<AuditEvent>>,
}

impl MemoryAuditSink {
    /// Create a new empty in-memory sink.
    pub fn new() -> Self {
        MemoryAuditSink::default()
    }

    /// Snapshot the recorded events.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().expect("audit sink lock poisoned").clone()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.lock().expect("audit sink lock poisoned").len()
    }

    /// Check whether no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuditSink for MemoryAuditSink {
    fn record(&self, event: AuditEvent) {
        self.events.lock().expect("audit sink lock poisoned").push(event);
    }
}

/// An audit sink that discards every event.
#[derive(Clone, Debug, Default)]
pub struct NullAuditSink;

impl NullAuditSink {
    /// Create a new discarding sink.
    pub fn new() -> Self {
        NullAuditSink
    }
}

impl AuditSink for NullAuditSink {
    fn record(&self, _event: AuditEvent) {}
}
