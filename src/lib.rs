//! Scolo Screening Backend
//!
//! Turns the raw, interleaved message stream of an autonomous
//! investigation agent into a clean, ordered event stream over HTTP SSE,
//! plus a final aggregate risk verdict per investigation.

pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

pub use state::AppState;
pub use utils::error::{AppError, AppResult};
