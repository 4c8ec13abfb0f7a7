//! Intelligence handlers.
//!
//! Use cases over the statistical intelligence engine: run every registered
//! analysis, and package the result for narrative consumers.

mod build_summary_payload;
mod run_intelligence;

pub use build_summary_payload::BuildSummaryPayloadHandler;
pub use run_intelligence::{IntelligenceOutcome, RunIntelligenceCommand, RunIntelligenceHandler};
