//! # Builder
//!
//! Two ways to assemble a [`User`]:
//!
//! - **Options struct**: [`User::new`] with a [`UserOptions`], relying on
//!   `..Default::default()` for the fields you leave out.
//! - **Fluent builder**: [`UserBuilder`], one setter per optional attribute.
//!
//! Both produce the same value. The [`Address`] is built separately and handed over
//! fully formed.
//!
//! ```rust
//! use pattern_catalog::builder::{Address, User, UserBuilder, UserOptions};
//!
//! let from_options = User::new(
//!     "LeShawn",
//!     UserOptions {
//!         age: Some(10),
//!         address: Some(Address::new(27610, "Raleigh")),
//!         ..Default::default()
//!     },
//! );
//! let from_builder = UserBuilder::new("LeShawn")
//!     .address(Address::new(27610, "Raleigh"))
//!     .age(10)
//!     .build();
//!
//! assert_eq!(from_options, from_builder);
//! assert_eq!(from_builder.phone, None);
//! ```

pub mod user;

pub use user::*;

use tracing::debug;

/// Fluent builder for [`User`].
#[derive(Debug, Clone)]
#[must_use = "a builder does nothing until `build` is called"]
pub struct UserBuilder {
    name: String,
    options: UserOptions,
}

impl UserBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: UserOptions::default(),
        }
    }

    pub fn age(mut self, age: u32) -> Self {
        self.options.age = Some(age);
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.options.phone = Some(phone.into());
        self
    }

    pub fn address(mut self, address: Address) -> Self {
        self.options.address = Some(address);
        self
    }

    pub fn build(self) -> User {
        debug!(name = %self.name, options = ?self.options, "Build user");
        User::new(self.name, self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_options_are_absent_not_empty() {
        let user = User::new(
            "LeShawn",
            UserOptions {
                age: Some(10),
                address: Some(Address::new(27610, "Raleigh")),
                ..Default::default()
            },
        );
        assert_eq!(user.phone, None);
        assert_eq!(user.age, Some(10));
        let address = user.address.expect("address was given");
        assert_eq!(address.zip(), 27610);
        assert_eq!(address.street(), "Raleigh");
    }

    #[test]
    fn present_but_empty_differs_from_absent() {
        let empty_phone = UserBuilder::new("a").phone("").age(0).build();
        let bare = UserBuilder::new("a").build();
        assert_eq!(empty_phone.phone.as_deref(), Some(""));
        assert_eq!(empty_phone.age, Some(0));
        assert_ne!(empty_phone, bare);
        assert_eq!(bare.age, None);
    }

    #[test]
    fn later_setter_overrides_earlier_one() {
        let user = UserBuilder::new("a").age(1).age(2).build();
        assert_eq!(user.age, Some(2));
    }
}
