//! Driver-approval lifecycle and the access each state grants.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Approval state of a principal's driver profile.
///
/// Parsing is lenient: a missing, null or unrecognized value is [`DriverStatus::None`],
/// which is the most restrictive state for driver sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum DriverStatus {
    #[default]
    None,
    PendingApproval,
    Approved,
    Rejected,
}

/// What a driver may reach inside approval-gated sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverAccess {
    /// Approved driver: the whole section.
    Full,
    /// Application under review: status-check views only.
    StatusCheckOnly,
    /// Application rejected: resubmission views only.
    ResubmissionOnly,
    /// No application yet: onboarding and document upload only.
    OnboardingOnly,
}

impl DriverStatus {
    /// Parse a backend status string, falling back to [`DriverStatus::None`].
    #[must_use]
    pub fn from_wire(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("APPROVED") => DriverStatus::Approved,
            // Older payloads used the document-review name for the same state.
            Some("PENDING_APPROVAL" | "PENDING_VERIFICATION") => DriverStatus::PendingApproval,
            Some("REJECTED") => DriverStatus::Rejected,
            Some(_) | None => DriverStatus::None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DriverStatus::None => "NONE",
            DriverStatus::PendingApproval => "PENDING_APPROVAL",
            DriverStatus::Approved => "APPROVED",
            DriverStatus::Rejected => "REJECTED",
        }
    }

    #[must_use]
    pub fn access(self) -> DriverAccess {
        match self {
            DriverStatus::Approved => DriverAccess::Full,
            DriverStatus::PendingApproval => DriverAccess::StatusCheckOnly,
            DriverStatus::Rejected => DriverAccess::ResubmissionOnly,
            DriverStatus::None => DriverAccess::OnboardingOnly,
        }
    }
}

impl From<Option<String>> for DriverStatus {
    fn from(value: Option<String>) -> Self {
        Self::from_wire(value.as_deref())
    }
}

impl From<DriverStatus> for String {
    fn from(status: DriverStatus) -> Self {
        status.as_str().to_owned()
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn known_values_round_trip_through_wire_names() {
        for status in [
            DriverStatus::None,
            DriverStatus::PendingApproval,
            DriverStatus::Approved,
            DriverStatus::Rejected,
        ] {
            assert_eq!(DriverStatus::from_wire(Some(status.as_str())), status);
        }
    }

    #[test]
    fn unknown_or_missing_values_fall_back_to_none() {
        assert_eq!(DriverStatus::from_wire(None), DriverStatus::None);
        assert_eq!(DriverStatus::from_wire(Some("")), DriverStatus::None);
        assert_eq!(DriverStatus::from_wire(Some("SUSPENDED")), DriverStatus::None);
        assert_eq!(DriverStatus::from_wire(Some("approved")), DriverStatus::None);
    }

    #[test]
    fn pending_verification_is_an_alias() {
        assert_eq!(
            DriverStatus::from_wire(Some("PENDING_VERIFICATION")),
            DriverStatus::PendingApproval
        );
    }

    #[test]
    fn access_is_four_way() {
        assert_eq!(DriverStatus::Approved.access(), DriverAccess::Full);
        assert_eq!(
            DriverStatus::PendingApproval.access(),
            DriverAccess::StatusCheckOnly
        );
        assert_eq!(
            DriverStatus::Rejected.access(),
            DriverAccess::ResubmissionOnly
        );
        assert_eq!(DriverStatus::None.access(), DriverAccess::OnboardingOnly);
    }

    #[test]
    fn deserializes_null_and_unknown_leniently() {
        let status: DriverStatus = serde_json::from_str("null").unwrap();
        assert_eq!(status, DriverStatus::None);

        let status: DriverStatus = serde_json::from_str("\"ON_HOLD\"").unwrap();
        assert_eq!(status, DriverStatus::None);

        let status: DriverStatus = serde_json::from_str("\"REJECTED\"").unwrap();
        assert_eq!(status, DriverStatus::Rejected);
    }
}
