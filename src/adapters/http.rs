//! Axum middleware applying the route gate to every request.

use crate::core::gate::{GateDecision, RouteGate};
use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
    Router,
};
use std::sync::Arc;

/// Passes public and authenticated requests through; answers everything
/// else with a 307 to the login page.
pub async fn route_gate_middleware(
    State(gate): State<Arc<RouteGate>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let target = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| request.uri().path());

    // HTTP/2 clients may split cookies over several headers.
    let cookies: Vec<&str> = request
        .headers()
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect();
    let cookie_header = if cookies.is_empty() {
        None
    } else {
        Some(cookies.join("; "))
    };

    match gate.check(target, cookie_header.as_deref()) {
        GateDecision::Pass => next.run(request).await,
        GateDecision::Redirect { location } => Redirect::temporary(&location).into_response(),
    }
}

pub fn with_route_gate(router: Router, gate: RouteGate) -> Router {
    router.layer(middleware::from_fn_with_state(
        Arc::new(gate),
        route_gate_middleware,
    ))
}
