//! Opaque validation error tokens.

use serde::{Deserialize, Serialize};

/// Well-known tokens produced by the builtin rules.
pub mod tokens {
    /// Token produced by [`required`](super::super::rules::required).
    pub const REQUIRED: &str = "validate.required";
    /// Token produced by [`email`](super::super::rules::email).
    pub const EMAIL: &str = "validate.email";
}

/// Opaque key identifying a validation failure.
///
/// Tokens are never displayed directly; the host resolves them through a
/// localization lookup. An empty token is not a failure signal: the
/// mechanism normalizes it to a pass (see
/// [`Validator::check`](super::Validator::check)).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorToken(String);

impl ErrorToken {
    /// Creates a token from a string key.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The token key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the empty token, which the mechanism treats
    /// as a pass.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ErrorToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for ErrorToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl std::fmt::Display for ErrorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
