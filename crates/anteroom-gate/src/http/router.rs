//! Router construction and server host.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anteroom_config::GateConfig;
use anteroom_telemetry::{Metrics, build_sha};
use anyhow::Result;
use axum::{Router, http::Request, middleware, routing::get};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::http::constants::HEADER_REQUEST_ID;
use crate::http::gate::enforce_gate;
use crate::http::health::{health, metrics};
use crate::http::telemetry::HttpMetricsLayer;
use crate::state::GateState;

/// Axum router wrapper that fronts an upstream application with the gate.
pub struct GateServer {
    router: Router,
}

impl GateServer {
    /// Wrap the upstream router with the gate middleware and the telemetry
    /// stack, and mount the service endpoints (`/health`, `/metrics`).
    ///
    /// The gate state is derived from the configuration once, here; requests
    /// only ever read it.
    #[must_use]
    pub fn new(config: &GateConfig, upstream: Router, telemetry: Metrics) -> Self {
        let state = Arc::new(GateState::new(config, telemetry.clone()));

        let service_routes = Router::new()
            .route("/health", get(health))
            .route("/metrics", get(metrics))
            .with_state(Arc::clone(&state));

        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                let method = request.method().clone();
                let uri_path = request.uri().path();
                let request_id = request
                    .headers()
                    .get(HEADER_REQUEST_ID)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("")
                    .to_string();

                tracing::info_span!(
                    "http.request",
                    method = %method,
                    route = %uri_path,
                    request_id = %request_id,
                    build_sha = %build_sha(),
                    status_code = tracing::field::Empty,
                    latency_ms = tracing::field::Empty
                )
            })
            .on_response(
                |response: &axum::response::Response, latency: Duration, span: &Span| {
                    let status = response.status().as_u16();
                    span.record("status_code", status);
                    let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
                    span.record("latency_ms", latency_ms);
                },
            );
        // Set runs outermost so generated ids are visible to propagation and
        // to the span below.
        let layered = ServiceBuilder::new()
            .layer(anteroom_telemetry::set_request_id_layer())
            .layer(anteroom_telemetry::propagate_request_id_layer())
            .layer(trace_layer)
            .layer(HttpMetricsLayer::new(telemetry));

        let router = upstream
            .merge(service_routes)
            .layer(middleware::from_fn_with_state(state, enforce_gate))
            .layer(layered);

        Self { router }
    }

    /// Serve the gated application on the supplied address.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener fails to bind or the server
    /// terminates unexpectedly.
    pub async fn serve(self, addr: SocketAddr) -> Result<()> {
        tracing::info!("Starting gate on {}", addr);
        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router.into_make_service()).await?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn into_router(self) -> Router {
        self.router
    }
}
