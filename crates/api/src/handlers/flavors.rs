//! Flavor catalog handler.

use scoop_core::Flavor;

use crate::gateway::GatewayResponse;

/// List the fixed flavor catalog.
///
/// No input, no storage access; always 200 with the same ten names in the
/// same order, regardless of storage state.
#[must_use]
pub fn list_flavors() -> GatewayResponse {
    GatewayResponse::json(200, &Flavor::catalog())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_the_ten_fixed_names_in_order() {
        let resp = list_flavors();
        assert_eq!(resp.status_code, 200);

        let names: Vec<serde_json::Value> =
            serde_json::from_str(resp.body.as_deref().unwrap()).unwrap();
        assert_eq!(names.len(), 10);
        assert_eq!(names[0], serde_json::json!({"Flavor": "Chocolate"}));
        assert_eq!(names[9], serde_json::json!({"Flavor": "Lime"}));
    }

    #[test]
    fn test_is_deterministic() {
        assert_eq!(list_flavors(), list_flavors());
    }
}
