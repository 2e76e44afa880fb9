//! Storage Layer
//!
//! Project bookkeeping for the backend.

pub mod store;

pub use store::ProjectStore;
