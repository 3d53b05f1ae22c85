//! Networking modules for the account API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns transport and response classification, `types` the wire
//! schema, `error` the failure taxonomy, and `api` the typed endpoint
//! surface plus the token-refresh interceptor.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
