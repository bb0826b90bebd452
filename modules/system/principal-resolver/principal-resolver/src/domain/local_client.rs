//! Local (in-process) client for the principal resolver.

use std::sync::Arc;

use async_trait::async_trait;
use principal_resolver_sdk::{PrincipalResolverClient, PrincipalResolverError};
use ridegate_security::{Credential, Principal};

use super::{DomainError, Service};

/// Local client wrapping the service.
pub struct PrincipalResolverLocalClient {
    svc: Arc<Service>,
}

impl PrincipalResolverLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

/// Rejected credentials are routine; lookup failures are not.
fn log_and_convert(op: &str, e: DomainError) -> PrincipalResolverError {
    match &e {
        DomainError::Rejected { .. } => {
            tracing::debug!(operation = op, error = %e, "credential rejected");
        }
        DomainError::Timeout { .. }
        | DomainError::PluginUnavailable { .. }
        | DomainError::InvalidProfile { .. } => {
            tracing::warn!(operation = op, error = %e, "principal_resolver call failed");
        }
        DomainError::Internal(_) => {
            tracing::error!(operation = op, error = ?e, "principal_resolver call failed");
        }
    }
    e.into()
}

#[async_trait]
impl PrincipalResolverClient for PrincipalResolverLocalClient {
    async fn resolve(&self, credential: &Credential) -> Result<Principal, PrincipalResolverError> {
        self.svc
            .resolve(credential)
            .await
            .map_err(|e| log_and_convert("resolve", e))
    }
}
