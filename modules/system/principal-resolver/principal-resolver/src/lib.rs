//! Principal Resolver Module
//!
//! Routes principal lookups to the configured plugin (HTTP backend or static
//! tokens), bounds every lookup with a timeout and logs failures once.
//!
//! Provides the `PrincipalResolverClient` implementation consumed by the
//! access gateway.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod module;

pub use config::{PrincipalResolverConfig, ResolverPlugin};
pub use module::PrincipalResolver;
