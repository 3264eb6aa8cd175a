//! Scoop Core - Shared types library.
//!
//! This crate provides common types used across all Scoop components:
//! - `api` - Order CRUD service
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - The `OrderId` newtype and the fixed flavor catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
