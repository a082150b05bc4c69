//! Opaque binding tokens.

use crate::constants::{
    LAYER_TOGGLE_BEHAVIOR, NONE_ALIAS, NONE_BINDING, TRANS_ALIAS, TRANS_BINDING,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single binding reference such as `&kp A` or `&mo NAV`.
///
/// The contents are never interpreted by the layout transforms; they are
/// moved between slots verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Binding(String);

impl Binding {
    /// Wraps a token exactly as given.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Parses an authored token, resolving the `XXX` and `___` aliases.
    ///
    /// Surrounding whitespace is dropped; everything else is kept as written.
    ///
    /// # Examples
    ///
    /// ```
    /// use splitmap::models::Binding;
    ///
    /// assert_eq!(Binding::parse("XXX").as_str(), "&none");
    /// assert_eq!(Binding::parse(" &kp A ").as_str(), "&kp A");
    /// ```
    pub fn parse(token: &str) -> Self {
        match token.trim() {
            NONE_ALIAS => Self::none(),
            TRANS_ALIAS => Self::trans(),
            other => Self::new(other),
        }
    }

    /// The no-op binding.
    pub fn none() -> Self {
        Self::new(NONE_BINDING)
    }

    /// The transparent binding.
    pub fn trans() -> Self {
        Self::new(TRANS_BINDING)
    }

    /// `&mo <layer>`.
    pub fn layer_toggle(layer: &str) -> Self {
        Self(format!("{LAYER_TOGGLE_BEHAVIOR} {layer}"))
    }

    /// Returns the raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the token is blank.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Name of the behavior this token invokes (`&kp A` → `kp`).
    pub fn behavior(&self) -> Option<&str> {
        let head = self.0.split_whitespace().next()?;
        head.strip_prefix('&').filter(|name| !name.is_empty())
    }

    /// Parameters following the behavior reference.
    pub fn params(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace().skip(1)
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Binding {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for Binding {
    fn from(token: String) -> Self {
        Self(token)
    }
}
