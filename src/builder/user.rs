use serde::{Deserialize, Serialize};

/// A postal address. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    zip: u32,
    street: String,
}

impl Address {
    pub fn new(zip: u32, street: impl Into<String>) -> Self {
        Self {
            zip,
            street: street.into(),
        }
    }

    pub fn zip(&self) -> u32 {
        self.zip
    }

    pub fn street(&self) -> &str {
        &self.street
    }
}

/// Optional attributes of a [`User`].
///
/// Every field defaults to `None`, so callers only spell out what they know.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserOptions {
    pub age: Option<u32>,
    pub phone: Option<String>,
    pub address: Option<Address>,
}

/// A user with a required name and optional details.
///
/// A missing attribute is `None`, which is distinct from `Some(0)` or `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub age: Option<u32>,
    pub phone: Option<String>,
    pub address: Option<Address>,
}

impl User {
    /// Creates a user from a name and whichever options are known.
    ///
    /// The address is taken as given; it is not validated here.
    pub fn new(name: impl Into<String>, options: UserOptions) -> Self {
        let UserOptions {
            age,
            phone,
            address,
        } = options;
        Self {
            name: name.into(),
            age,
            phone,
            address,
        }
    }
}
