#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! HTTP Principal Resolver Plugin
//!
//! Exchanges a session credential for the caller's profile by calling the
//! backend's `GET /api/users/me` with `Authorization: Bearer <token>`.
//!
//! Only an HTTP 200 with a valid profile body yields a principal; every other
//! outcome is reported as an error and the gateway fails closed.

pub mod config;
pub mod domain;

pub use config::HttpPrincipalPluginConfig;
pub use domain::{BuildError, Service};
