//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the talent grid domain.

mod errors;
mod grid_position;
mod ids;

pub use errors::ValidationError;
pub use grid_position::{AxisLevel, GridPosition, Tier};
pub use ids::EmployeeId;
