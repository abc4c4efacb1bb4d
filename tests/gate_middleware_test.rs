#![cfg(feature = "server")]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    routing::get,
    Router,
};
use crm_toolkit::adapters::http::with_route_gate;
use crm_toolkit::{GateRules, RouteGate};
use tower::ServiceExt;

fn app(gate: RouteGate) -> Router {
    let router = Router::new()
        .route("/dashboard", get(|| async { "dashboard" }))
        .route("/auth/login", get(|| async { "login" }));
    with_route_gate(router, gate)
}

#[tokio::test]
async fn test_redirects_without_cookie() {
    let response = app(RouteGate::default())
        .oneshot(Request::builder().uri("/dashboard").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/auth/login?redirect=%2Fdashboard"
    );
}

#[tokio::test]
async fn test_passes_with_cookie() {
    let response = app(RouteGate::default())
        .oneshot(
            Request::builder()
                .uri("/dashboard")
                .header(header::COOKIE, "lang=pt-BR; auth_token=abc123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_cookie_split_across_headers() {
    let response = app(RouteGate::default())
        .oneshot(
            Request::builder()
                .uri("/dashboard")
                .header(header::COOKIE, "lang=pt-BR")
                .header(header::COOKIE, "auth_token=abc123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_passes_without_cookie() {
    let response = app(RouteGate::default())
        .oneshot(Request::builder().uri("/auth/login").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_redirect_keeps_query() {
    let gate = RouteGate::new(GateRules {
        redirect_param: "next".to_string(),
        ..GateRules::default()
    });
    let response = app(gate)
        .oneshot(
            Request::builder()
                .uri("/dashboard?tab=orders")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/auth/login?next=%2Fdashboard%3Ftab%3Dorders"
    );
}
