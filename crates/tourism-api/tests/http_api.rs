//! End-to-end checks of the data routes, driven through the router in-process.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::{
    body::{Body, Bytes},
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use tourism_api::{app_state::AppState, config::ServiceConfig, router};

fn app() -> Router {
    router::build_router(AppState::new(ServiceConfig::default()))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Bytes) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_owned());
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, body)
}

async fn get_json(uri: &str) -> Value {
    let (status, content_type, body) = get(app(), uri).await;
    assert_eq!(status, StatusCode::OK, "GET {uri}");
    assert_eq!(content_type.as_deref(), Some("application/json"));
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn root_reports_running() {
    let (status, content_type, body) = get(app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(&body[..], br#"{"message":"Tourism API is running"}"#);
}

#[tokio::test]
async fn visitors_are_monthly_records() {
    let v = get_json("/api/visitors").await;
    let rows = v.as_array().unwrap();
    assert!(!rows.is_empty());
    for row in rows {
        assert!(row["month"].is_string());
        assert!(row["visitors"].is_u64());
        assert!(row["domestic"].is_u64());
        assert!(row["international"].is_u64());
    }
    assert_eq!(rows[0]["avg_stay_days"], 4.2);
    assert!(rows.last().unwrap().get("avg_stay_days").is_none());
}

#[tokio::test]
async fn demographics_has_both_breakdowns() {
    let v = get_json("/api/demographics").await;
    let ages = v["age_groups"].as_array().unwrap();
    let purposes = v["purpose"].as_array().unwrap();
    assert!(!ages.is_empty());
    assert!(!purposes.is_empty());
    assert!(ages.iter().all(|a| a["group"].is_string() && a["percentage"].is_u64()));
    assert!(purposes.iter().all(|p| p["type"].is_string() && p["percentage"].is_u64()));
}

#[tokio::test]
async fn destination_ratings_are_bounded() {
    let v = get_json("/api/popular-destinations").await;
    let rows = v.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    for row in rows {
        let rating = row["rating"].as_f64().unwrap();
        assert!((0.0..=5.0).contains(&rating));
    }
    assert_eq!(rows[0]["name"], "Banff National Park");
}

#[tokio::test]
async fn repeated_requests_are_byte_identical() {
    let app = app();
    for uri in ["/", "/api/visitors", "/api/demographics", "/api/popular-destinations"] {
        let (_, _, first) = get(app.clone(), uri).await;
        let (_, _, second) = get(app.clone(), uri).await;
        assert_eq!(first, second, "GET {uri}");
    }
}

#[tokio::test]
async fn query_strings_are_ignored() {
    let (_, _, plain) = get(app(), "/api/visitors").await;
    let (status, _, with_query) = get(app(), "/api/visitors?limit=1&sort=desc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(plain, with_query);
}

#[tokio::test]
async fn unknown_path_is_404() {
    let (status, _, body) = get(app(), "/api/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let v: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(v["detail"], "Not Found");
}

#[tokio::test]
async fn unsupported_method_is_405() {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/visitors")
        .body(Body::empty())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn preflight_is_permissive_on_every_route() {
    for uri in ["/", "/api/visitors", "/api/demographics", "/api/popular-destinations"] {
        let req = Request::builder()
            .method(Method::OPTIONS)
            .uri(uri)
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-custom-header")
            .body(Body::empty())
            .unwrap();
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "OPTIONS {uri}");

        let h = resp.headers();
        assert_eq!(h[header::ACCESS_CONTROL_ALLOW_ORIGIN], "http://localhost:3000");
        assert_eq!(h[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
        assert_eq!(h[header::ACCESS_CONTROL_ALLOW_METHODS], "GET");
        assert_eq!(h[header::ACCESS_CONTROL_ALLOW_HEADERS], "x-custom-header");
        assert_eq!(h[header::ACCESS_CONTROL_MAX_AGE], "600");
    }
}

#[tokio::test]
async fn simple_request_echoes_origin() {
    let req = Request::builder()
        .uri("/api/demographics")
        .header(header::ORIGIN, "https://dashboard.example")
        .body(Body::empty())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://dashboard.example"
    );
    assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}
