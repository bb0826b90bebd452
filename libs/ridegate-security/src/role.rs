//! Closed set of principal roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Prefix some backends put in front of role names (`ROLE_DRIVER`).
const BACKEND_ROLE_PREFIX: &str = "ROLE_";

/// A role a principal can hold.
///
/// Roles arrive from the backend as strings; anything outside this set is
/// rejected at parse time instead of being carried around as free-form text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    Passenger,
    Driver,
    Admin,
}

/// A role name that is not part of [`Role`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

impl Role {
    pub const ALL: [Role; 3] = [Role::Passenger, Role::Driver, Role::Admin];

    /// Canonical wire name (`PASSENGER`, `DRIVER`, `ADMIN`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Passenger => "PASSENGER",
            Role::Driver => "DRIVER",
            Role::Admin => "ADMIN",
        }
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name.strip_prefix(BACKEND_ROLE_PREFIX).unwrap_or(name);
        match name {
            "PASSENGER" => Ok(Role::Passenger),
            "DRIVER" => Ok(Role::Driver),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(UnknownRole(s.to_owned())),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = UnknownRole;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn accepts_backend_prefix() {
        assert_eq!("ROLE_DRIVER".parse::<Role>().unwrap(), Role::Driver);
        assert_eq!("ROLE_ADMIN".parse::<Role>().unwrap(), Role::Admin);
    }

    #[test]
    fn rejects_unknown_and_lowercase_names() {
        assert_eq!(
            "SUPERUSER".parse::<Role>().unwrap_err(),
            UnknownRole("SUPERUSER".to_owned())
        );
        assert!("driver".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&Role::Passenger).unwrap();
        assert_eq!(json, "\"PASSENGER\"");

        let role: Role = serde_json::from_str("\"ROLE_PASSENGER\"").unwrap();
        assert_eq!(role, Role::Passenger);

        let err = serde_json::from_str::<Role>("\"PILOT\"").unwrap_err();
        assert!(err.to_string().contains("unknown role 'PILOT'"));
    }
}
