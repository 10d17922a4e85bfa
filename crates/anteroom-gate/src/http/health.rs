//! Health and diagnostics endpoints.

use std::sync::Arc;

use anteroom_telemetry::build_sha;
use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::state::GateState;

#[derive(Serialize)]
pub(crate) struct HealthResponse {
    pub(crate) status: &'static str,
    pub(crate) protected: bool,
    pub(crate) build: &'static str,
}

pub(crate) async fn health(State(state): State<Arc<GateState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        protected: state.context.protected,
        build: build_sha(),
    })
}

pub(crate) async fn metrics(State(state): State<Arc<GateState>>) -> Response {
    match state.telemetry.render() {
        Ok(body) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            body,
        )
            .into_response(),
        Err(err) => {
            error!(error = %err, "failed to render metrics");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
