//! Lightweight in-process metrics.
//!
//! Counters and histograms live in `DashMap`s of atomics and are rendered in
//! Prometheus text format by the `/metrics` handler. `track` is the axum
//! middleware that feeds them.

pub mod metrics;

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

/// Route label for requests that matched no route.
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Method label for extension methods outside the standard set.
pub const OTHER_METHOD: &str = "other";

/// Collapse the request method onto a fixed label set.
pub fn method_label(method: &Method) -> &'static str {
    match method.as_str() {
        "GET" => "GET",
        "HEAD" => "HEAD",
        "POST" => "POST",
        "PUT" => "PUT",
        "DELETE" => "DELETE",
        "PATCH" => "PATCH",
        "OPTIONS" => "OPTIONS",
        "CONNECT" => "CONNECT",
        "TRACE" => "TRACE",
        _ => OTHER_METHOD,
    }
}

/// Record count and latency of every request, labelled by route template.
pub async fn track(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = method_label(req.method());
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_owned());

    let resp = next.run(req).await;

    let status = resp.status();
    let m = state.metrics();
    m.http_requests.inc(&[
        ("method", method),
        ("route", route.as_str()),
        ("status", status.as_str()),
    ]);
    m.http_duration.observe(&[("route", route.as_str())], started.elapsed());
    resp
}
