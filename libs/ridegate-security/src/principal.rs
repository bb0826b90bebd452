use std::collections::BTreeSet;

use crate::driver_status::DriverStatus;
use crate::role::Role;

/// `Principal` is the authenticated identity behind a credential.
///
/// Built by the principal resolver from the backend's `/api/users/me` profile and
/// handed to section gates. It lives for a single navigation and is never cached.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    /// Backend user ID.
    id: String,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    email: String,
    /// Roles held by the principal. Ordered so serialized output is stable.
    #[serde(default)]
    roles: BTreeSet<Role>,
    /// Driver-approval status. Absent means [`DriverStatus::None`].
    #[serde(default)]
    driver_status: DriverStatus,
}

impl Principal {
    /// Create a new `Principal` builder
    #[must_use]
    pub fn builder(id: impl Into<String>) -> PrincipalBuilder {
        PrincipalBuilder {
            id: id.into(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            roles: BTreeSet::new(),
            driver_status: DriverStatus::None,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// First and last name joined by a space; empty parts are skipped.
    #[must_use]
    pub fn display_name(&self) -> String {
        [self.first_name.as_str(), self.last_name.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn roles(&self) -> &BTreeSet<Role> {
        &self.roles
    }

    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    #[must_use]
    pub fn driver_status(&self) -> DriverStatus {
        self.driver_status
    }
}

pub struct PrincipalBuilder {
    id: String,
    first_name: String,
    last_name: String,
    email: String,
    roles: BTreeSet<Role>,
    driver_status: DriverStatus,
}

impl PrincipalBuilder {
    #[must_use]
    pub fn first_name(mut self, first_name: &str) -> Self {
        first_name.clone_into(&mut self.first_name);
        self
    }

    #[must_use]
    pub fn last_name(mut self, last_name: &str) -> Self {
        last_name.clone_into(&mut self.last_name);
        self
    }

    #[must_use]
    pub fn email(mut self, email: &str) -> Self {
        email.clone_into(&mut self.email);
        self
    }

    #[must_use]
    pub fn role(mut self, role: Role) -> Self {
        self.roles.insert(role);
        self
    }

    #[must_use]
    pub fn roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.roles.extend(roles);
        self
    }

    #[must_use]
    pub fn driver_status(mut self, driver_status: DriverStatus) -> Self {
        self.driver_status = driver_status;
        self
    }

    #[must_use]
    pub fn build(self) -> Principal {
        Principal {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            roles: self.roles,
            driver_status: self.driver_status,
        }
    }
}
