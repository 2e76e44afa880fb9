//! Services
//!
//! Business logic: the agent correlation core and the audit sink.

pub mod agent;
pub mod audit;
