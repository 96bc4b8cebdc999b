//! The value bound to the page's text input.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value the text input starts with when the user has not edited it.
pub const DEFAULT_USER_NAME: &str = "Dr. Smith";

/// The text bound to the name input.
///
/// Any string is a valid name, including the empty string and arbitrary
/// Unicode. The value is kept exactly as entered: no trimming or
/// normalisation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    /// Creates a name from any string.
    ///
    /// # Examples
    ///
    /// ```
    /// use radassist_core::UserName;
    ///
    /// let name = UserName::new("Dr. Jones");
    /// assert_eq!(name.as_str(), "Dr. Jones");
    /// ```
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the name is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the name and returns the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for UserName {
    fn default() -> Self {
        Self(DEFAULT_USER_NAME.to_string())
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for UserName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
