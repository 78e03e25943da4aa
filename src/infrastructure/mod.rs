//! Infrastructure layer
//!
//! External dependencies live here. For this stack that is a single shared
//! HTTP client connecting the gateway to the internal data service.

pub mod http_client;
