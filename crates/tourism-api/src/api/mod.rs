//! Data routes.
//!
//! Each handler serializes one `static` collection from
//! `tourism_core::dataset`. No parameters are read, so query strings and
//! bodies are ignored, and no branch can fail.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use tourism_core::dataset;
use tourism_core::model::{Destination, MonthlyVisitors, StatusMessage, VisitorDemographics};

pub async fn root() -> Json<&'static StatusMessage> {
    Json(&dataset::STATUS)
}

pub async fn visitors() -> Json<&'static [MonthlyVisitors]> {
    tracing::debug!(records = dataset::MONTHLY_VISITORS.len(), "serving monthly visitors");
    Json(dataset::MONTHLY_VISITORS)
}

pub async fn demographics() -> Json<&'static VisitorDemographics> {
    tracing::debug!("serving visitor demographics");
    Json(&dataset::DEMOGRAPHICS)
}

pub async fn popular_destinations() -> Json<&'static [Destination]> {
    tracing::debug!(
        records = dataset::POPULAR_DESTINATIONS.len(),
        "serving popular destinations"
    );
    Json(dataset::POPULAR_DESTINATIONS)
}

/// Router fallback for paths no route matches.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" })))
}
