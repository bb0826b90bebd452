//! Access gateway for the carpooling web frontend.
//!
//! Every navigation goes through two layers:
//! - [`auth::access_middleware`] runs the pure [`policy::AccessPolicy`] on the
//!   path and the presence of the session cookie;
//! - [`auth::section_gate_middleware`] resolves the principal for
//!   role-restricted sections and applies the [`gate::RoleGate`].
//!
//! Session endpoints (`/session`, `/logout`, `/api/session`, `/healthz`) sit
//! outside both layers.

pub mod auth;
pub mod config;
pub mod cookie;
pub mod error;
pub mod gate;
pub mod module;
pub mod policy;
pub mod routes;
pub mod session;

pub use config::{AccessConfig, RemediationConfig, SectionConfig};
pub use error::Problem;
pub use module::AccessGateway;
pub use policy::{AccessDecision, AccessPolicy};
pub use routes::{PathError, RouteClass, RouteTable, RouteTableError, canonical_path};
