//! Wire models for the principal resolver module.

use ridegate_security::{DriverStatus, Principal, Role};
use serde::{Deserialize, Serialize};

use crate::error::PrincipalResolverError;

/// Backend endpoint returning the profile of the bearer-token owner.
pub const USERS_ME_PATH: &str = "/api/users/me";

/// Profile returned by `GET /api/users/me`.
///
/// Roles stay as strings here; converting into a [`Principal`] validates them
/// against the closed [`Role`] set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub driver_status: Option<String>,
}

impl TryFrom<UserProfile> for Principal {
    type Error = PrincipalResolverError;

    fn try_from(profile: UserProfile) -> Result<Self, Self::Error> {
        if profile.id.trim().is_empty() {
            return Err(PrincipalResolverError::MalformedPayload(
                "profile id is empty".to_owned(),
            ));
        }

        let roles = profile
            .roles
            .iter()
            .map(|name| name.parse::<Role>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| PrincipalResolverError::MalformedPayload(e.to_string()))?;

        Ok(Principal::builder(profile.id)
            .first_name(profile.first_name.as_deref().unwrap_or_default())
            .last_name(profile.last_name.as_deref().unwrap_or_default())
            .email(&profile.email)
            .roles(roles)
            .driver_status(DriverStatus::from_wire(profile.driver_status.as_deref()))
            .build())
    }
}
