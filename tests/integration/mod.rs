//! Integration Tests Module
//!
//! End-to-end tests for the screening backend: stream translation
//! scenarios, verdict computation and replay, the audit trail, and the
//! project lifecycle.

// Full stream-to-event translation scenarios
mod stream_translation_test;

// Verdict rules and replay reconstruction
mod verdict_test;

// Audit trail ordering and isolation
mod audit_test;

// Project creation, store, and investigation startup
mod project_flow_test;
