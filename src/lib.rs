//! Request wrappers and shared plumbing for the storefront API automation suite.
//!
//! The live specs under `tests/` drive these wrappers against the practice
//! service; see `storefront.toml.example` for the settings they read.

pub mod client;
pub mod config;
pub mod controllers;
pub mod helpers;
pub mod telemetry;

pub use client::{ApiClient, ApiResponse, ClientError, PendingRequest};
pub use storefront_api_types as types;
