//! Request handlers.
//!
//! Each handler is a stateless adapter: one inbound [`GatewayRequest`] maps
//! to at most one [`OrderStore`](crate::db::OrderStore) call and one
//! [`GatewayResponse`](crate::gateway::GatewayResponse). Validation failures
//! (missing body or path parameter) yield 400; storage failures yield 500
//! with the detail logged server-side, never serialized into the response.

pub mod flavors;
pub mod orders;
