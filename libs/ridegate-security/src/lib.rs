#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
pub mod context;
pub mod credential;
pub mod driver_status;
pub mod principal;
pub mod role;

pub use context::AuthContext;
pub use credential::{Credential, CredentialError};
pub use driver_status::{DriverAccess, DriverStatus};
pub use principal::{Principal, PrincipalBuilder};
pub use role::{Role, UnknownRole};
