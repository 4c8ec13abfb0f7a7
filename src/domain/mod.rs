//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (grid positions, tiers, IDs, errors)
//! - `employee` - The employee snapshot and the dimensions it is grouped by
//! - `intelligence` - Pure statistical services detecting skew per dimension

pub mod employee;
pub mod foundation;
pub mod intelligence;
