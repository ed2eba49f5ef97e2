//! Viewer identity
//!
//! The viewer is the account that `@me` resolves to in query qualifiers.
//! It is always passed in explicitly from configuration.

use serde::{Deserialize, Serialize};

/// Qualifier value standing for the active viewer
pub const ME: &str = "@me";

/// The active viewer
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Viewer {
    /// GitHub login
    pub login: String,
}

impl Viewer {
    /// Create a viewer for the given login
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into().trim().to_string(),
        }
    }

    /// The viewer's login
    pub fn login(&self) -> &str {
        &self.login
    }

    /// True when no login is configured
    pub fn is_anonymous(&self) -> bool {
        self.login.is_empty()
    }

    /// Resolve a qualifier value to a concrete login
    ///
    /// `@me` maps to the viewer's login, anything else is returned as is.
    /// An anonymous viewer resolves `@me` to `None`.
    pub fn resolve<'a>(&'a self, value: &'a str) -> Option<&'a str> {
        if value == ME {
            if self.is_anonymous() {
                None
            } else {
                Some(self.login())
            }
        } else {
            Some(value)
        }
    }

    /// Case-insensitive comparison against a login
    pub fn is(&self, login: &str) -> bool {
        !self.is_anonymous() && self.login.eq_ignore_ascii_case(login)
    }
}
