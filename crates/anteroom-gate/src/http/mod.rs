//! HTTP surface modules (gate middleware, routers, handlers).

/// Path allowlist predicates.
pub mod allowlist;
/// Challenge response construction.
pub mod challenge;
/// Shared constants and header names for HTTP surfaces.
pub mod constants;
/// Basic-credential decoding and validation.
pub mod credentials;
/// Request-gate middleware and decision logic.
pub mod gate;
/// Security response-header policy.
pub mod headers;
/// Health and diagnostics endpoints.
pub mod health;
/// Router construction and server host.
pub mod router;
/// Metrics middleware for HTTP requests.
pub mod telemetry;
