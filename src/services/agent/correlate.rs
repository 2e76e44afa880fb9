//! Correlation Table
//!
//! Tracks in-flight invocations for one investigation: which correlation
//! id belongs to which work key, which keys have already started, and
//! which results are orphans. Calls and results for distinct ids may
//! interleave arbitrarily; messages for one investigation are processed
//! strictly sequentially, so no locking is needed here.

use std::collections::{HashMap, HashSet};

use tracing::warn;

/// How to handle a second call for an already-pending correlation id.
///
/// First write always wins; the variants only differ in whether the
/// protocol violation is surfaced to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateCallPolicy {
    /// Silently keep the first pending entry
    #[default]
    Ignore,
    /// Keep the first pending entry, log a warning
    Warn,
}

/// Per-investigation invocation tracking
#[derive(Debug)]
pub struct CorrelationTable {
    /// Registered work keys; calls for anything else are rejected
    known_keys: HashSet<String>,
    /// correlation id -> work key for in-flight invocations
    pending: HashMap<String, String>,
    /// Work keys for which a start has already been reported
    started: HashSet<String>,
    policy: DuplicateCallPolicy,
}

impl CorrelationTable {
    /// Create a table tracking the given work keys
    pub fn new<I, S>(keys: I, policy: DuplicateCallPolicy) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known_keys: keys.into_iter().map(Into::into).collect(),
            pending: HashMap::new(),
            started: HashSet::new(),
            policy,
        }
    }

    /// Record a call. Returns `true` when this is the first observed call
    /// for `work_key` in this investigation (the caller should emit a
    /// start event). Returns `false` and changes nothing for unknown
    /// keys or duplicate correlation ids.
    pub fn record_call(&mut self, correlation_id: &str, work_key: &str) -> bool {
        if !self.known_keys.contains(work_key) {
            return false;
        }
        if self.pending.contains_key(correlation_id) {
            if self.policy == DuplicateCallPolicy::Warn {
                warn!(
                    correlation_id,
                    work_key, "duplicate call for pending correlation id, keeping first"
                );
            }
            return false;
        }
        self.pending
            .insert(correlation_id.to_string(), work_key.to_string());
        self.started.insert(work_key.to_string())
    }

    /// Resolve a result: remove and return the pending work key for
    /// `correlation_id`, or `None` for orphans and duplicates.
    pub fn resolve_result(&mut self, correlation_id: &str) -> Option<String> {
        self.pending.remove(correlation_id)
    }

    /// Number of in-flight invocations
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Whether a start has been reported for `work_key`
    pub fn is_started(&self, work_key: &str) -> bool {
        self.started.contains(work_key)
    }
}
