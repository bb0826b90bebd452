#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static Principal Resolver Plugin
//!
//! Maps fixed session tokens to fixed profiles, for local development and E2E
//! tests with distinct users. Unknown tokens are rejected.
//!
//! ## Configuration
//!
//! ```yaml
//! static_plugin:
//!   tokens:
//!     - token: "valid-driver-session-token"
//!       profile:
//!         id: "driver789"
//!         firstName: "Driver"
//!         email: "d@ex.com"
//!         roles: ["DRIVER"]
//!         driverStatus: "APPROVED"
//! ```

pub mod config;
pub mod domain;

pub use config::StaticPrincipalPluginConfig;
pub use domain::Service;
