//! Principal Resolver SDK
//!
//! This crate provides the public API for the `principal_resolver` module:
//!
//! - [`PrincipalResolverClient`] - Public API trait for consumers
//! - [`PrincipalResolverPluginClient`] - Plugin API trait for implementations
//! - [`UserProfile`] - Wire model of the backend's `GET /api/users/me` response
//! - [`PrincipalResolverError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use principal_resolver_sdk::PrincipalResolverClient;
//!
//! let principal = resolver.resolve(&credential).await?;
//! if principal.has_role(Role::Driver) { /* ... */ }
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod plugin_api;

// Re-export main types at crate root
pub use api::PrincipalResolverClient;
pub use error::PrincipalResolverError;
pub use models::{USERS_ME_PATH, UserProfile};
pub use plugin_api::PrincipalResolverPluginClient;
