//! Data Models
//!
//! Shared data structures for the backend.

pub mod project;
