//! Sensor dashboard - A small web backend for time-series sensor readings
//!
//! This crate stores readings in a relational database and serves them over HTTP:
//! a JSON endpoint per sensor, a write endpoint, and an HTML dashboard that charts
//! the latest readings of each sensor.

#![deny(unsafe_code, unused_must_use, rustdoc::broken_intra_doc_links)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::unwrap_used,
    rust_2018_idioms,
)]
// Entity and template derives generate undocumented items
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

/// Configuration management for database and application settings
pub mod config;
/// Core business logic - framework-agnostic reading storage and dashboard loading
pub mod core;
/// SeaORM entity definitions for database tables
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// HTTP interface - router, handlers, and page templates
pub mod web;

#[cfg(test)]
pub mod test_utils;
