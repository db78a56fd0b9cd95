//! Contact user data model.

use std::fmt;

/// One contact in the list.
///
/// Values are immutable once built and compare by value.
///
/// # Examples
/// ```
/// use contacts::domain::User;
///
/// let user = User::new("Arifin", "Firdaus");
/// assert_eq!(user.full_name(), "Arifin Firdaus");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    first_name: String,
    last_name: String,
}

impl User {
    /// Construct a user from its two name parts.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Given name.
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Family name.
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// Row label: first and last name joined by one space.
    pub fn full_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
