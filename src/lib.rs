//! Catalog Stack Library
//!
//! This library provides both tiers of the catalog demo: the public gateway
//! ("main-backend") and the private data service ("internal-backend"). The
//! binaries are thin wrappers over the routers exposed here, which also makes
//! both services drivable directly from tests.

pub mod error;
pub mod handlers;
pub mod infrastructure;
pub mod internal;
pub mod models;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use error::GatewayError;
pub use models::*;
pub use state::{GatewayState, InternalState};
