//! Intelligence HTTP adapter - REST API for the statistical intelligence engine.
//!
//! Provides endpoints for:
//! - Running every registered analysis over an employee snapshot
//! - Building the narrative summary payload
//! - Listing registered dimensions

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;

pub use handlers::{health, IntelligenceApiError, IntelligenceAppState};
pub use routes::intelligence_router;
