//! Role and driver-status gate for role-restricted sections.

use ridegate_security::{DriverAccess, DriverStatus, Principal, Role};

use crate::config::RemediationConfig;
use crate::routes::Section;

const PENDING_MESSAGE: &str = "Your driver profile is currently under review. \
     You'll be able to offer rides once it's approved.";
const REJECTED_MESSAGE: &str = "There was an issue with your driver application. \
     Please check your documents and resubmit if necessary.";
const ONBOARDING_MESSAGE: &str = "Please complete your driver profile and submit your \
     documents for verification to offer rides.";

/// Why a principal was turned away. Only ever logged; callers see a single
/// unauthorized outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnauthorizedReason {
    NoPrincipal,
    MissingRole(Role),
}

/// Explanation shown to a driver whose profile does not unlock the section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusNotice {
    pub status: DriverStatus,
    pub access: DriverAccess,
    pub message: &'static str,
    /// Page the driver can use to move their application forward.
    pub remediation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    Allow,
    Unauthorized(UnauthorizedReason),
    StatusDenied(StatusNotice),
}

#[derive(Debug, Clone)]
pub struct RoleGate {
    remediation: RemediationConfig,
}

impl RoleGate {
    #[must_use]
    pub fn new(remediation: RemediationConfig) -> Self {
        Self { remediation }
    }

    #[must_use]
    pub fn check(&self, section: &Section, principal: Option<&Principal>) -> GateOutcome {
        let Some(principal) = principal else {
            return GateOutcome::Unauthorized(UnauthorizedReason::NoPrincipal);
        };
        if !principal.has_role(section.role()) {
            return GateOutcome::Unauthorized(UnauthorizedReason::MissingRole(section.role()));
        }
        if !section.requires_driver_approval() {
            return GateOutcome::Allow;
        }

        let status = principal.driver_status();
        let access = status.access();
        let (message, remediation) = match access {
            DriverAccess::Full => return GateOutcome::Allow,
            DriverAccess::StatusCheckOnly => (PENDING_MESSAGE, &self.remediation.pending),
            DriverAccess::ResubmissionOnly => (REJECTED_MESSAGE, &self.remediation.rejected),
            DriverAccess::OnboardingOnly => (ONBOARDING_MESSAGE, &self.remediation.onboarding),
        };
        GateOutcome::StatusDenied(StatusNotice {
            status,
            access,
            message,
            remediation: remediation.clone(),
        })
    }
}
