#![forbid(unsafe_code)]

//! HTTP access gate for protected pre-production deployments.
//!
//! The gate sits in front of an upstream router and classifies every inbound
//! request exactly once: unprotected deployments and allowlisted paths pass
//! through, everything else must present valid Basic credentials or receives
//! a 401 challenge. Every response leaving the gate carries the fixed set of
//! security/no-index headers.

pub mod http;

mod state;

pub use http::gate::AuthDecision;
pub use http::router::GateServer;
