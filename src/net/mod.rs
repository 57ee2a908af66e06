//! Networking modules for the REST gateway.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and owns token custody, `gateway` is the
//! trait seam the session store depends on, `error` is the shared failure
//! type, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod gateway;
#[cfg(test)]
pub mod gateway_mock;
pub mod types;
