//! Employee module - The read-only snapshot the engine analyzes.
//!
//! Employees are owned by the grid/session collaborator; this module only
//! defines their shape and how they are partitioned by dimension.

mod dimension;
mod employee;
mod tenure;

pub use dimension::Dimension;
pub use employee::Employee;
pub use tenure::TenureBucket;
