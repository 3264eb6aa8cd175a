//! Gateway-facing request/response contract.
//!
//! Handlers receive an already-parsed HTTP-like request (path parameters and
//! raw body string) and return a status code plus optional JSON body. The
//! routing layer that produces the request and consumes the response lives in
//! [`crate::routes`]; the handlers themselves never touch axum types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Inbound request shape: optional path parameters, optional raw body.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct GatewayRequest {
    /// Path parameters extracted by the router, e.g. `{"id": "..."}`.
    #[serde(default, rename = "pathParameters")]
    pub path_parameters: Option<HashMap<String, String>>,

    /// Raw request body, absent when the request carried none.
    #[serde(default)]
    pub body: Option<String>,
}

impl GatewayRequest {
    /// An empty request: no path parameters, no body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a raw body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attach a single path parameter.
    #[must_use]
    pub fn with_path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_parameters
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Look up a path parameter by name.
    #[must_use]
    pub fn path_param(&self, name: &str) -> Option<&str> {
        self.path_parameters
            .as_ref()
            .and_then(|params| params.get(name))
            .map(String::as_str)
    }
}

/// Outbound response shape: status code plus optional JSON string body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GatewayResponse {
    /// HTTP status code.
    #[serde(rename = "statusCode")]
    pub status_code: u16,

    /// JSON-serialized body, absent for body-less responses (201/204/4xx/5xx).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl GatewayResponse {
    /// Build a body-less response from a status code.
    #[must_use]
    pub const fn status(status_code: u16) -> Self {
        Self {
            status_code,
            body: None,
        }
    }

    /// Build a response carrying `payload` serialized to JSON.
    ///
    /// Serialization of the payload types used in this service cannot fail;
    /// should it ever, the failure is logged and a 500 without a body is
    /// returned instead of a half-serialized payload.
    #[must_use]
    pub fn json<T: Serialize>(status_code: u16, payload: &T) -> Self {
        match serde_json::to_string(payload) {
            Ok(body) => Self {
                status_code,
                body: Some(body),
            },
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize response payload");
                Self::status(500)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_has_no_body() {
        let resp = GatewayResponse::status(204);
        assert_eq!(resp.status_code, 204);
        assert!(resp.body.is_none());
    }

    #[test]
    fn test_json_serializes_payload() {
        #[derive(Serialize)]
        struct Payload {
            name: &'static str,
        }

        let resp = GatewayResponse::json(200, &Payload { name: "scoop" });
        assert_eq!(resp.status_code, 200);
        assert_eq!(resp.body.as_deref(), Some(r#"{"name":"scoop"}"#));
    }

    #[test]
    fn test_path_param_lookup() {
        let req = GatewayRequest::new().with_path_param("id", "abc");
        assert_eq!(req.path_param("id"), Some("abc"));
        assert_eq!(req.path_param("other"), None);
    }

    #[test]
    fn test_empty_request() {
        let req = GatewayRequest::new();
        assert!(req.path_parameters.is_none());
        assert!(req.body.is_none());
        assert_eq!(req.path_param("id"), None);
    }
}
