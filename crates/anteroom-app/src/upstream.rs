//! Placeholder upstream application served behind the gate.
//!
//! Real deployments put their own router here; these routes exist so the
//! binary is usable out of the box and so the exempt `/api/` surface has
//! something to answer with.

use axum::{Json, Router, response::Html, routing::get};
use serde_json::{Value, json};

const LANDING_PAGE: &str = "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  <title>Anteroom</title>\n</head>\n<body>\n  <h1>Anteroom</h1>\n  <p>The access gate is in front of this page. If you can read it, the\n  gate let you through.</p>\n</body>\n</html>\n";

/// Build the demo upstream router.
#[must_use]
pub(crate) fn router() -> Router {
    Router::new()
        .route("/", get(landing))
        .route("/api/status", get(status))
}

async fn landing() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

async fn status() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
