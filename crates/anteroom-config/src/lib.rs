#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Immutable, environment-derived configuration for the access gate.
//!
//! Layout: `model.rs` (typed config models and the environment classifier),
//! `loader.rs` (environment-variable loading), `error.rs` (error types).

pub mod error;
pub mod loader;
pub mod model;

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    ENV_APP_ENV, ENV_DEPLOY_ENVIRONMENT, ENV_DEPLOY_PREVIEW, ENV_DEPLOY_URL, ENV_GATE_BIND_ADDR,
    ENV_GATE_HTTP_PORT, ENV_GATE_PASSWORD, ENV_GATE_REALM, ENV_GATE_USERNAME,
};
pub use model::{DeploymentHints, EnvironmentContext, GateConfig, GateSecrets, RuntimeMode};
