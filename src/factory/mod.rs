//! # Factory Method
//!
//! One creation entry point, [`EmployeeFactory::create`], that picks the concrete kind of
//! [`Employee`] from a [`RoleSelector`].
//!
//! The selector can be the legacy numeric code (`1` = Developer, `2` = Tester) or a
//! [`Role`] tag. Anything else is rejected with [`FactoryError::UnknownRole`] instead of
//! quietly producing nothing.
//!
//! ```rust
//! use pattern_catalog::factory::{EmployeeFactory, FactoryError, Role};
//!
//! let factory = EmployeeFactory::new();
//! let patrick = factory.create("Patrick", 2u8).unwrap();
//! assert_eq!(patrick.role, Role::Tester);
//! assert_eq!(patrick.introduce(), "Hi, I am Patrick and I am a Tester");
//!
//! let err = factory.create("Nobody", 9u8).unwrap_err();
//! assert_eq!(err, FactoryError::UnknownRole("9".into()));
//! ```

pub mod employee;
pub mod error;

pub use employee::*;
pub use error::*;

use tracing::{debug, warn};

/// Builds employees from a name and a role selector.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmployeeFactory;

impl EmployeeFactory {
    pub fn new() -> Self {
        Self
    }

    /// Creates a single employee.
    ///
    /// # Errors
    /// Returns [`FactoryError::UnknownRole`] if `selector` does not name a known role.
    pub fn create(
        &self,
        name: impl Into<String>,
        selector: impl Into<RoleSelector>,
    ) -> Result<Employee, FactoryError> {
        let name = name.into();
        let selector = selector.into();
        let role = selector.resolve().inspect_err(|e| {
            warn!(%name, ?selector, error = %e, "Create failed");
        })?;
        debug!(%name, %role, "Created");
        Ok(Employee { name, role })
    }

    /// Creates a roster in input order, stopping at the first unknown role.
    pub fn create_all<N, S>(
        &self,
        entries: impl IntoIterator<Item = (N, S)>,
    ) -> Result<Vec<Employee>, FactoryError>
    where
        N: Into<String>,
        S: Into<RoleSelector>,
    {
        entries
            .into_iter()
            .map(|(name, selector)| self.create(name, selector))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_codes_map_to_roles() {
        let factory = EmployeeFactory::new();
        assert_eq!(factory.create("LeShawn", 1u8).unwrap().role, Role::Developer);
        assert_eq!(factory.create("Alfred", 2u8).unwrap().role, Role::Tester);
    }

    #[test]
    fn tags_round_trip_through_codes() {
        let factory = EmployeeFactory::new();
        for role in [Role::Developer, Role::Tester] {
            assert_eq!(factory.create("a", role).unwrap().role, role);
            assert_eq!(factory.create("b", role.code()).unwrap().role, role);
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        let factory = EmployeeFactory::new();
        for code in [0u8, 3, 255] {
            assert_eq!(
                factory.create("x", code),
                Err(FactoryError::UnknownRole(code.to_string()))
            );
        }
    }

    #[test]
    fn parses_symbolic_tags_case_insensitively() {
        assert_eq!(
            " Developer ".parse::<RoleSelector>(),
            Ok(RoleSelector::Tag(Role::Developer))
        );
        assert_eq!(
            "manager".parse::<RoleSelector>(),
            Err(FactoryError::UnknownRole("manager".into()))
        );
    }

    #[test]
    fn create_all_stops_at_first_unknown_role() {
        let factory = EmployeeFactory::new();
        let roster = factory
            .create_all([("Patrick", 2u8), ("LeShawn", 1), ("Alfred", 2)])
            .unwrap();
        let names: Vec<_> = roster.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Patrick", "LeShawn", "Alfred"]);

        let err = factory.create_all([("Patrick", 2u8), ("Ghost", 5)]).unwrap_err();
        assert_eq!(err, FactoryError::UnknownRole("5".into()));
    }
}
