//! Scoop API library.
//!
//! This crate provides the order service functionality as a library,
//! allowing it to be tested and reused. The binary in `main.rs` wires the
//! handlers to HTTP via axum.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod gateway;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
