//! Core types for Scoop.

pub mod flavor;
pub mod id;

pub use flavor::{FLAVOR_CATALOG, Flavor};
pub use id::OrderId;
