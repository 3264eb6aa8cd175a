//! HTTP routing: the thin adapter between axum and the gateway contract.
//!
//! Each route only builds a [`GatewayRequest`], borrows the shared pool as an
//! [`OrderRepository`], invokes the matching handler, and converts the
//! [`GatewayResponse`] back into an axum response. No semantics live here.

use axum::{
    Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};

use crate::db::OrderRepository;
use crate::gateway::{GatewayRequest, GatewayResponse};
use crate::handlers::{flavors, orders};
use crate::state::AppState;

/// Build the service router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route(
            "/orders/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
        .route("/flavors", get(list_flavors))
}

/// Convert a gateway response into an axum response.
///
/// Bodies are always JSON when present; an out-of-range status code would be
/// a handler bug and degrades to 500.
fn into_axum(resp: GatewayResponse) -> Response {
    let status = StatusCode::from_u16(resp.status_code).unwrap_or_else(|_| {
        tracing::error!(status_code = resp.status_code, "invalid status code");
        StatusCode::INTERNAL_SERVER_ERROR
    });

    match resp.body {
        Some(body) => (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        None => status.into_response(),
    }
}

/// Treat an empty HTTP body as an absent one, matching the gateway contract.
fn request_with_body(body: String) -> GatewayRequest {
    if body.is_empty() {
        GatewayRequest::new()
    } else {
        GatewayRequest::new().with_body(body)
    }
}

async fn create_order(State(state): State<AppState>, body: String) -> Response {
    let repo = OrderRepository::new(state.pool());
    into_axum(orders::create_order(&repo, &request_with_body(body)).await)
}

async fn get_order(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let repo = OrderRepository::new(state.pool());
    let request = GatewayRequest::new().with_path_param("id", id);
    into_axum(orders::get_order(&repo, &request).await)
}

async fn list_orders(State(state): State<AppState>) -> Response {
    let repo = OrderRepository::new(state.pool());
    into_axum(orders::list_orders(&repo, &GatewayRequest::new()).await)
}

async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: String,
) -> Response {
    let repo = OrderRepository::new(state.pool());
    let request = request_with_body(body).with_path_param("id", id);
    into_axum(orders::update_order(&repo, state.config().update_key_source, &request).await)
}

async fn delete_order(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let repo = OrderRepository::new(state.pool());
    let request = GatewayRequest::new().with_path_param("id", id);
    into_axum(orders::delete_order(&repo, &request).await)
}

async fn list_flavors() -> Response {
    into_axum(flavors::list_flavors())
}
