//! Order CRUD handlers.
//!
//! Status contract:
//!
//! | Handler | Success | Client error | Server error |
//! |---|---|---|---|
//! | create | 201 | 400 (absent/unparseable body) | 500 |
//! | get | 200 | 400 (missing `id`) | 500 (absent record OR store failure) |
//! | list | 200 (empty table ⇒ `[]`) | — | 500 |
//! | update | 204 | 400 (missing id or body) | 500 (malformed body or store failure) |
//! | delete | 204 (idempotent) | 400 (missing `id`) | 500 |
//!
//! Get deliberately collapses "no such order" and "storage error" into 500 —
//! that is the original boundary contract. The two cases are still logged
//! distinctly.

use serde::Deserialize;

use scoop_core::OrderId;

use crate::config::UpdateKeySource;
use crate::db::OrderStore;
use crate::gateway::{GatewayRequest, GatewayResponse};

/// Create request body. Both fields are required strings; anything beyond
/// presence is not validated (Flavor is not checked against the catalog).
#[derive(Debug, Deserialize)]
struct NewOrderBody {
    #[serde(rename = "Customer")]
    customer: String,
    #[serde(rename = "Flavor")]
    flavor: String,
}

/// Update request body. `Id` only matters when the key source is
/// [`UpdateKeySource::Body`]; `Flavor` is always required.
#[derive(Debug, Deserialize)]
struct UpdateOrderBody {
    #[serde(rename = "Id", default)]
    id: Option<String>,
    #[serde(rename = "Flavor")]
    flavor: String,
}

/// Create an order from `{Customer, Flavor}` in the body.
///
/// The id is generated server-side and logged, not returned; success is a
/// bare 201.
pub async fn create_order<S: OrderStore>(store: &S, request: &GatewayRequest) -> GatewayResponse {
    let Some(raw) = request.body.as_deref() else {
        tracing::warn!("create order: body is missing");
        return GatewayResponse::status(400);
    };

    let body: NewOrderBody = match serde_json::from_str(raw) {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(error = %e, body = raw, "create order: unparseable body");
            return GatewayResponse::status(400);
        }
    };

    match store.insert(&body.customer, &body.flavor).await {
        Ok(id) => {
            tracing::info!(order_id = %id, customer = %body.customer, "order created");
            GatewayResponse::status(201)
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                customer = %body.customer,
                flavor = %body.flavor,
                "unable to add order"
            );
            GatewayResponse::status(500)
        }
    }
}

/// Get one order by the `id` path parameter.
pub async fn get_order<S: OrderStore>(store: &S, request: &GatewayRequest) -> GatewayResponse {
    let Some(id) = request.path_param("id") else {
        tracing::warn!("get order: id path parameter is missing");
        return GatewayResponse::status(400);
    };
    let id = OrderId::from(id);

    match store.get_by_id(&id).await {
        Ok(Some(order)) => GatewayResponse::json(200, &order),
        Ok(None) => {
            tracing::warn!(order_id = %id, "no such order");
            GatewayResponse::status(500)
        }
        Err(e) => {
            tracing::error!(error = %e, order_id = %id, "unable to read order");
            GatewayResponse::status(500)
        }
    }
}

/// List every order in the table.
///
/// An empty table is a 200 with `[]`, not a failure.
pub async fn list_orders<S: OrderStore>(store: &S, _request: &GatewayRequest) -> GatewayResponse {
    match store.scan_all().await {
        Ok(orders) => GatewayResponse::json(200, &orders),
        Err(e) => {
            tracing::error!(error = %e, "unable to scan orders");
            GatewayResponse::status(500)
        }
    }
}

/// Update the Flavor of one order.
///
/// The identifier comes from the `id` path parameter or the body's `Id`
/// field, selected by `key_source`. Updating an id with no record behind it
/// is a no-op that still returns 204.
pub async fn update_order<S: OrderStore>(
    store: &S,
    key_source: UpdateKeySource,
    request: &GatewayRequest,
) -> GatewayResponse {
    let Some(raw) = request.body.as_deref() else {
        tracing::warn!("update order: body is missing");
        return GatewayResponse::status(400);
    };

    if key_source == UpdateKeySource::Path && request.path_param("id").is_none() {
        tracing::warn!("update order: id path parameter is missing");
        return GatewayResponse::status(400);
    }

    let body: UpdateOrderBody = match serde_json::from_str(raw) {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(error = %e, body = raw, "update order: malformed body");
            return GatewayResponse::status(500);
        }
    };

    let id = match key_source {
        UpdateKeySource::Path => request.path_param("id").map(OrderId::from),
        UpdateKeySource::Body => body.id.map(OrderId::from),
    };
    let Some(id) = id else {
        tracing::warn!("update order: id is missing from body");
        return GatewayResponse::status(400);
    };

    match store.update_flavor(&id, &body.flavor).await {
        Ok(()) => {
            tracing::info!(order_id = %id, flavor = %body.flavor, "order updated");
            GatewayResponse::status(204)
        }
        Err(e) => {
            tracing::error!(error = %e, order_id = %id, "unable to update order");
            GatewayResponse::status(500)
        }
    }
}

/// Delete one order by the `id` path parameter.
///
/// Idempotent: deleting a key that does not exist is still a 204.
pub async fn delete_order<S: OrderStore>(store: &S, request: &GatewayRequest) -> GatewayResponse {
    let Some(id) = request.path_param("id") else {
        tracing::warn!("delete order: id path parameter is missing");
        return GatewayResponse::status(400);
    };
    let id = OrderId::from(id);

    match store.delete_by_id(&id).await {
        Ok(()) => {
            tracing::info!(order_id = %id, "order deleted");
            GatewayResponse::status(204)
        }
        Err(e) => {
            tracing::error!(error = %e, order_id = %id, "unable to delete order");
            GatewayResponse::status(500)
        }
    }
}
