//! Environment loading for the gate configuration.
//!
//! # Design
//! - Read the process environment once at startup into an immutable
//!   [`GateConfig`]; nothing else in the workspace touches `std::env`.
//! - Treat empty values as absent so platform templating that expands to `""`
//!   behaves the same as an unset variable.
//! - Missing secrets are not a load error; validation fails closed instead.

use std::env;
use std::net::{IpAddr, Ipv4Addr};

use tracing::info;

use crate::error::{ConfigError, ConfigResult};
use crate::model::{DeploymentHints, GateConfig, GateSecrets, RuntimeMode};

/// Execution mode (`development` or `production`).
pub const ENV_APP_ENV: &str = "APP_ENV";
/// Preview-deployment flag set by the hosting platform.
pub const ENV_DEPLOY_PREVIEW: &str = "DEPLOY_PREVIEW";
/// Explicit deployment environment tag.
pub const ENV_DEPLOY_ENVIRONMENT: &str = "DEPLOY_ENVIRONMENT";
/// Public URL of the deployment.
pub const ENV_DEPLOY_URL: &str = "DEPLOY_URL";
/// Expected gate username.
pub const ENV_GATE_USERNAME: &str = "GATE_USERNAME";
/// Expected gate password.
pub const ENV_GATE_PASSWORD: &str = "GATE_PASSWORD";
/// Realm advertised in the challenge response.
pub const ENV_GATE_REALM: &str = "GATE_REALM";
/// Bind address for the HTTP listener.
pub const ENV_GATE_BIND_ADDR: &str = "GATE_BIND_ADDR";
/// Port for the HTTP listener.
pub const ENV_GATE_HTTP_PORT: &str = "GATE_HTTP_PORT";

const DEFAULT_REALM: &str = "Protected";
const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_HTTP_PORT: u16 = 8080;

impl GateConfig {
    /// Load the gate configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the runtime mode, bind address, or port
    /// cannot be parsed. Absent secrets are accepted; they make every
    /// credential check fail closed later.
    pub fn from_env() -> ConfigResult<Self> {
        let config = Self::from_lookup(|name| env::var(name).ok())?;
        info!(
            mode = config.mode.as_str(),
            secrets_configured = config.secrets.is_configured(),
            "gate configuration loaded"
        );
        Ok(config)
    }

    /// Load the gate configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same contract as [`GateConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let mode = var(ENV_APP_ENV).map_or(Ok(RuntimeMode::Development), |value| {
            RuntimeMode::parse(&value)
        })?;

        let hints = DeploymentHints {
            preview: var(ENV_DEPLOY_PREVIEW).is_some_and(|value| parse_flag(&value)),
            environment_tag: var(ENV_DEPLOY_ENVIRONMENT),
            deployment_url: var(ENV_DEPLOY_URL),
        };

        let secrets = GateSecrets {
            username: var(ENV_GATE_USERNAME),
            password: var(ENV_GATE_PASSWORD),
        };

        let bind_addr = var(ENV_GATE_BIND_ADDR).map_or(Ok(DEFAULT_BIND_ADDR), |value| {
            value
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr { value })
        })?;
        let http_port = var(ENV_GATE_HTTP_PORT).map_or(Ok(DEFAULT_HTTP_PORT), |value| {
            value.parse().map_err(|_| ConfigError::InvalidPort { value })
        })?;

        Ok(Self {
            mode,
            hints,
            secrets,
            realm: var(ENV_GATE_REALM).unwrap_or_else(|| DEFAULT_REALM.to_string()),
            bind_addr,
            http_port,
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
