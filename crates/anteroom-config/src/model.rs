//! Typed configuration models for the access gate.

use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::error::{ConfigError, ConfigResult};

/// Execution mode the deployment was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    /// Local development build; never subject to the gate.
    Development,
    /// Production-style build; candidate for gating when deployment hints match.
    Production,
}

impl RuntimeMode {
    /// Stable string form used in logs and health output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    /// Parse a runtime mode from its environment payload.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRuntimeMode`] when the value is neither
    /// `development` nor `production`.
    pub fn parse(value: &str) -> ConfigResult<Self> {
        match value {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(ConfigError::InvalidRuntimeMode {
                value: other.to_string(),
            }),
        }
    }
}

/// Deployment-identity hints used to recognise pre-production deployments.
#[derive(Debug, Clone, Default)]
pub struct DeploymentHints {
    /// Explicit preview flag set by the deployment platform.
    pub preview: bool,
    /// Explicit environment tag, matched exactly against `preview`/`staging`.
    pub environment_tag: Option<String>,
    /// Public deployment URL, matched by substring against `preview`/`staging`.
    pub deployment_url: Option<String>,
}

impl DeploymentHints {
    /// Whether any hint identifies this deployment as pre-production.
    ///
    /// The tag comparison is exact; the URL comparison is a substring test and
    /// therefore deliberately permissive. Deployments that need precision
    /// should set the tag and leave the URL hint unset.
    #[must_use]
    pub fn indicates_preproduction(&self) -> bool {
        if self.preview {
            return true;
        }
        if self
            .environment_tag
            .as_deref()
            .is_some_and(|tag| tag == "preview" || tag == "staging")
        {
            return true;
        }
        self.deployment_url
            .as_deref()
            .is_some_and(|url| url.contains("preview") || url.contains("staging"))
    }
}

/// Shared-secret credentials expected by the gate.
///
/// Either field may be absent; validation fails closed in that case. The
/// struct intentionally redacts both values from its `Debug` output so
/// configured secrets can never leak through logging.
#[derive(Clone, Default)]
pub struct GateSecrets {
    /// Expected username, if configured.
    pub username: Option<String>,
    /// Expected password, if configured.
    pub password: Option<String>,
}

impl GateSecrets {
    /// Whether both secrets are present and non-empty.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.is_empty());
        present(&self.username) && present(&self.password)
    }
}

impl fmt::Debug for GateSecrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GateSecrets")
            .field("username", &self.username.as_ref().map(|_| "<redacted>"))
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Immutable process-wide gate configuration.
///
/// Constructed once at startup and passed into the HTTP layer; nothing mutates
/// it afterwards.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Execution mode of this build.
    pub mode: RuntimeMode,
    /// Deployment-identity hints.
    pub hints: DeploymentHints,
    /// Expected credentials for the challenge.
    pub secrets: GateSecrets,
    /// Realm advertised in the `WWW-Authenticate` challenge.
    pub realm: String,
    /// Address the HTTP listener binds to.
    pub bind_addr: IpAddr,
    /// Port the HTTP listener binds to.
    pub http_port: u16,
}

impl GateConfig {
    /// Socket address derived from the bind address and port.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.http_port)
    }
}

/// Per-process verdict on whether the deployment is protected.
///
/// Derived once from [`GateConfig`]; recomputing it per request would be
/// equally correct because the inputs never change during a process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentContext {
    /// Whether every non-exempt request must present credentials.
    pub protected: bool,
}

impl EnvironmentContext {
    /// Classify the deployment from its immutable configuration.
    ///
    /// A deployment is protected only when it is a production-style build AND
    /// at least one deployment hint identifies it as pre-production. The
    /// two-part condition keeps ordinary development runs out of the gate even
    /// when a stray hint is set.
    #[must_use]
    pub fn classify(config: &GateConfig) -> Self {
        Self {
            protected: config.mode == RuntimeMode::Production
                && config.hints.indicates_preproduction(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(mode: RuntimeMode, hints: DeploymentHints) -> GateConfig {
        GateConfig {
            mode,
            hints,
            secrets: GateSecrets::default(),
            realm: "Protected".to_string(),
            bind_addr: IpAddr::from([127, 0, 0, 1]),
            http_port: 8080,
        }
    }

    #[test]
    fn development_is_never_protected() {
        let hints = DeploymentHints {
            preview: true,
            environment_tag: Some("staging".to_string()),
            deployment_url: Some("https://staging.example.com".to_string()),
        };
        let context = EnvironmentContext::classify(&config(RuntimeMode::Development, hints));
        assert!(!context.protected);
    }

    #[test]
    fn production_without_hints_is_not_protected() {
        let context =
            EnvironmentContext::classify(&config(RuntimeMode::Production, DeploymentHints::default()));
        assert!(!context.protected);
    }

    #[test]
    fn preview_flag_marks_production_protected() {
        let hints = DeploymentHints {
            preview: true,
            ..DeploymentHints::default()
        };
        let context = EnvironmentContext::classify(&config(RuntimeMode::Production, hints));
        assert!(context.protected);
    }

    #[test]
    fn environment_tag_requires_exact_match() {
        let tagged = |tag: &str| DeploymentHints {
            environment_tag: Some(tag.to_string()),
            ..DeploymentHints::default()
        };
        for tag in ["preview", "staging"] {
            let context = EnvironmentContext::classify(&config(RuntimeMode::Production, tagged(tag)));
            assert!(context.protected, "tag {tag} should protect");
        }
        for tag in ["prod", "staging-eu", "Preview"] {
            let context = EnvironmentContext::classify(&config(RuntimeMode::Production, tagged(tag)));
            assert!(!context.protected, "tag {tag} should not protect");
        }
    }

    #[test]
    fn deployment_url_matches_by_substring() {
        let hinted = |url: &str| DeploymentHints {
            deployment_url: Some(url.to_string()),
            ..DeploymentHints::default()
        };
        let context = EnvironmentContext::classify(&config(
            RuntimeMode::Production,
            hinted("https://app-staging.example.com"),
        ));
        assert!(context.protected);

        let context = EnvironmentContext::classify(&config(
            RuntimeMode::Production,
            hinted("https://app.example.com"),
        ));
        assert!(!context.protected);
    }

    #[test]
    fn secrets_require_both_fields_non_empty() {
        assert!(!GateSecrets::default().is_configured());
        assert!(
            !GateSecrets {
                username: Some("admin".to_string()),
                password: None,
            }
            .is_configured()
        );
        assert!(
            !GateSecrets {
                username: Some("admin".to_string()),
                password: Some(String::new()),
            }
            .is_configured()
        );
        assert!(
            GateSecrets {
                username: Some("admin".to_string()),
                password: Some("hunter2".to_string()),
            }
            .is_configured()
        );
    }

    #[test]
    fn secrets_debug_output_is_redacted() {
        let secrets = GateSecrets {
            username: Some("admin".to_string()),
            password: Some("hunter2".to_string()),
        };
        let rendered = format!("{secrets:?}");
        assert!(!rendered.contains("admin"));
        assert!(!rendered.contains("hunter2"));
    }
}
