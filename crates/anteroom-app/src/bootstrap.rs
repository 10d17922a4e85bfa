//! Boot sequence: load configuration, install telemetry, serve the gate.

use anteroom_config::GateConfig;
use anteroom_gate::GateServer;
use anteroom_telemetry::{LoggingConfig, Metrics, init_logging};
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::upstream;

/// Dependencies required to bootstrap the application.
pub(crate) struct BootstrapDependencies {
    logging: LoggingConfig<'static>,
    config: GateConfig,
    telemetry: Metrics,
}

impl BootstrapDependencies {
    /// Construct production dependencies from the environment for the binary
    /// entrypoint.
    pub(crate) fn from_env() -> AppResult<Self> {
        let logging = LoggingConfig::default();
        let config = GateConfig::from_env()
            .map_err(|err| AppError::config("gate_config.from_env", err))?;
        let telemetry =
            Metrics::new().map_err(|err| AppError::telemetry("telemetry.metrics", err))?;

        Ok(Self {
            logging,
            config,
            telemetry,
        })
    }
}

/// Entry point for the application boot sequence.
///
/// # Errors
///
/// Returns an error if dependency construction or application startup fails.
pub async fn run_app() -> AppResult<()> {
    let dependencies = BootstrapDependencies::from_env()?;
    run_app_with(dependencies).await
}

async fn run_app_with(dependencies: BootstrapDependencies) -> AppResult<()> {
    init_logging(&dependencies.logging)
        .map_err(|err| AppError::telemetry("telemetry.init_logging", err))?;

    let addr = dependencies.config.socket_addr();
    info!(mode = dependencies.config.mode.as_str(), %addr, "starting anteroom");

    let server = GateServer::new(&dependencies.config, upstream::router(), dependencies.telemetry);
    server
        .serve(addr)
        .await
        .map_err(|err| AppError::server("gate_server.serve", err))
}
