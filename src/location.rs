//! Navigation locations and the intent carried through a login redirect.
//!
//! DESIGN
//! ======
//! The "current location" is an explicit value passed into guard evaluation,
//! not something the gate captures from the environment. The transient state
//! payload stays flexible (`serde_json::Value`) so the router host can attach
//! arbitrary data without this crate knowing its shape.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error returned by [`Location::parse`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LocationError {
    /// The input was an empty string.
    #[error("location is empty")]
    Empty,
    /// The path did not start with `/`.
    #[error("location is not rooted: {0:?}")]
    NotRooted(String),
}

/// A navigation location: path, optional query string, and optional transient
/// state attached by the router host.
///
/// `path` and `query` are kept verbatim; this crate never normalizes,
/// percent-decodes, or reorders them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Rooted route path, e.g. `/account`.
    pub path: String,
    /// Raw query string without the leading `?`, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Opaque transient navigation state, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Value>,
}

impl Location {
    /// Create a location with no query and no transient state.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), query: None, state: None }
    }

    /// Attach a raw query string (without the leading `?`).
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Attach an opaque transient state payload.
    #[must_use]
    pub fn with_state(mut self, state: Value) -> Self {
        self.state = Some(state);
        self
    }

    /// Path plus query, reassembled verbatim (`/account?tab=billing`).
    #[must_use]
    pub fn full_path(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{query}", self.path),
            None => self.path.clone(),
        }
    }

    /// Parse a `path` or `path?query` string into a location.
    ///
    /// The input must be rooted (start with `/`). Everything after the first
    /// `?` becomes the query, verbatim — an empty query (`/a?`) is preserved
    /// so `full_path` round-trips exactly.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError`] if the input is empty or not rooted.
    pub fn parse(raw: &str) -> Result<Self, LocationError> {
        if raw.is_empty() {
            return Err(LocationError::Empty);
        }
        if !raw.starts_with('/') {
            return Err(LocationError::NotRooted(raw.to_owned()));
        }
        let location = match raw.split_once('?') {
            Some((path, query)) => Self::new(path).with_query(query),
            None => Self::new(raw),
        };
        Ok(location)
    }
}

/// The location a visitor attempted to reach when a protected route denied
/// them, carried on the login redirect and consumed exactly once by the login
/// flow. Not persisted across a page reload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigationIntent {
    /// The originally requested location, unmodified.
    pub location: Location,
}

impl NavigationIntent {
    /// Capture the denied location as a replayable intent.
    #[must_use]
    pub fn new(location: Location) -> Self {
        Self { location }
    }

    /// Consume the intent, yielding the location to replay.
    #[must_use]
    pub fn into_location(self) -> Location {
        self.location
    }
}
