//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations. The intelligence engine is
//! pure, so handlers hold only the composed analysis registry.

pub mod handlers;

pub use handlers::{
    BuildSummaryPayloadHandler, IntelligenceOutcome, RunIntelligenceCommand,
    RunIntelligenceHandler,
};
