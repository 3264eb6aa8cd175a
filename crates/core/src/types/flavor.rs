//! The fixed flavor catalog.
//!
//! Ten literal names, never persisted and never mutated. The catalog is
//! advisory only: orders are not validated against it on create or update.

use serde::{Deserialize, Serialize};

/// The allowed flavor names, in the order they are served to clients.
pub const FLAVOR_CATALOG: [&str; 10] = [
    "Chocolate",
    "Vanilla",
    "MintChocolate",
    "BubbleGum",
    "Pistachio",
    "RockyRoad",
    "Raspberry",
    "Mango",
    "CherryJubilee",
    "Lime",
];

/// Wire projection of one catalog entry: `{"Flavor": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flavor {
    #[serde(rename = "Flavor")]
    pub flavor: String,
}

impl Flavor {
    /// List the whole catalog as wire projections, in catalog order.
    #[must_use]
    pub fn catalog() -> Vec<Self> {
        FLAVOR_CATALOG
            .iter()
            .map(|name| Self {
                flavor: (*name).to_owned(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_ten_fixed_names() {
        let catalog = Flavor::catalog();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog[0].flavor, "Chocolate");
        assert_eq!(catalog[9].flavor, "Lime");
    }

    #[test]
    fn test_catalog_is_stable() {
        assert_eq!(Flavor::catalog(), Flavor::catalog());
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_string(&Flavor {
            flavor: "Vanilla".to_owned(),
        })
        .unwrap();
        assert_eq!(json, r#"{"Flavor":"Vanilla"}"#);
    }
}
