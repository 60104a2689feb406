use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use super::FactoryError;

/// The job an [`Employee`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Developer,
    Tester,
}

impl Role {
    /// Numeric code used by the legacy selector (`1` = Developer, `2` = Tester).
    pub fn code(self) -> u8 {
        match self {
            Role::Developer => 1,
            Role::Tester => 2,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Developer => write!(f, "Developer"),
            Role::Tester => write!(f, "Tester"),
        }
    }
}

/// Chooses which kind of employee the factory builds.
///
/// A selector is either the numeric code or a symbolic [`Role`]. Codes are not checked
/// until [`RoleSelector::resolve`], which is where unknown values are rejected.
///
/// ```rust
/// use pattern_catalog::factory::{Role, RoleSelector};
///
/// assert_eq!(RoleSelector::from(1u8).resolve(), Ok(Role::Developer));
/// assert_eq!("tester".parse::<RoleSelector>().unwrap().resolve(), Ok(Role::Tester));
/// assert!(RoleSelector::from(7u8).resolve().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleSelector {
    Code(u8),
    Tag(Role),
}

impl RoleSelector {
    pub fn resolve(&self) -> Result<Role, FactoryError> {
        match self {
            RoleSelector::Code(1) => Ok(Role::Developer),
            RoleSelector::Code(2) => Ok(Role::Tester),
            RoleSelector::Code(other) => Err(FactoryError::UnknownRole(other.to_string())),
            RoleSelector::Tag(role) => Ok(*role),
        }
    }
}

impl From<u8> for RoleSelector {
    fn from(code: u8) -> Self {
        RoleSelector::Code(code)
    }
}

impl From<Role> for RoleSelector {
    fn from(role: Role) -> Self {
        RoleSelector::Tag(role)
    }
}

impl FromStr for RoleSelector {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "developer" => Ok(RoleSelector::Tag(Role::Developer)),
            "tester" => Ok(RoleSelector::Tag(Role::Tester)),
            _ => Err(FactoryError::UnknownRole(s.to_string())),
        }
    }
}

/// A member of staff produced by the [`EmployeeFactory`](super::EmployeeFactory).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub role: Role,
}

impl Employee {
    /// The greeting each employee gives when asked to introduce themselves.
    pub fn introduce(&self) -> String {
        format!("Hi, I am {} and I am a {}", self.name, self.role)
    }
}
