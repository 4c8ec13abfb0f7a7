//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod intelligence;

pub use intelligence::{
    BuildSummaryPayloadHandler, IntelligenceOutcome, RunIntelligenceCommand,
    RunIntelligenceHandler,
};
