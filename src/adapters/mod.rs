//! Adapters - Connect the domain to the outside world.
//!
//! - `http` - axum REST surface over the intelligence engine

pub mod http;
