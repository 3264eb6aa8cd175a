//! The persisted order entity.

use serde::{Deserialize, Serialize};

use scoop_core::OrderId;

/// One order record, keyed by a server-generated [`OrderId`].
///
/// Wire field names are PascalCase (`Id`, `Customer`, `Flavor`), matching the
/// stored attribute names. `Customer` is immutable after creation; only
/// `Flavor` may change, via the Update handler. `Flavor` is free-form and is
/// deliberately not checked against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "Id")]
    pub id: OrderId,
    #[serde(rename = "Customer")]
    pub customer: String,
    #[serde(rename = "Flavor")]
    pub flavor: String,
}
