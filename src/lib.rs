//! Nine Box Intelligence - Statistical skew detection for a 3×3 talent grid
//!
//! This crate analyzes how employees are distributed across the nine grid
//! positions and flags dimensions (location, function, level, tenure,
//! manager) whose placement deviates from the company baseline.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
