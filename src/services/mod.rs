//! Business logic services
//!
//! Services orchestrate the gateway's domain operations and coordinate with
//! the infrastructure layer.

pub mod catalog_service;
pub mod health_service;
