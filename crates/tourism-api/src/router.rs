//! Axum router wiring.
//!
//! Layer order, outermost first: CORS, request tracing, metrics. CORS sits
//! outside everything so preflight requests are answered before method
//! routing could turn them into 405s.

use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{api, app_state::AppState, config::CorsSection, obs, ops};

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cfg().cors);

    Router::new()
        .route("/", get(api::root))
        .route("/api/visitors", get(api::visitors))
        .route("/api/demographics", get(api::demographics))
        .route("/api/popular-destinations", get(api::popular_destinations))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .fallback(api::not_found)
        .layer(middleware::from_fn_with_state(state.clone(), obs::track))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Open policy: any origin, method and header, with credentials.
///
/// A literal `*` is not allowed together with credentials, so origin, method
/// and headers are mirrored back from the request instead.
pub fn cors_layer(cfg: &CorsSection) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .max_age(Duration::from_secs(cfg.max_age_secs))
}
