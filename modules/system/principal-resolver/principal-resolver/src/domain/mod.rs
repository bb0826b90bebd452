//! Domain layer for the principal resolver.

pub mod error;
pub mod local_client;
pub mod service;

pub use error::DomainError;
pub use local_client::PrincipalResolverLocalClient;
pub use service::Service;
