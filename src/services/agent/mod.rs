//! Agent Services
//!
//! The correlation and translation core: everything between the raw
//! agent stream and the typed lifecycle events the transport serves.

pub mod aggregate;
pub mod correlate;
pub mod events;
pub mod executor;
pub mod extract;
pub mod identify;
pub mod message;
pub mod runner;
pub mod translator;

pub use events::InvestigationEvent;
pub use executor::{AgentConfig, AgentExecutor};
pub use runner::InvestigationService;
pub use translator::EventTranslator;
