//! Session-presence signal and the observer the gate reads it through.
//!
//! DESIGN
//! ======
//! The gate never touches session storage directly. It reads a
//! [`SessionSignal`] through an injected [`SessionObserver`], so tests can
//! substitute a fake store and hosts can adapt whatever reactive state layer
//! they own.
//!
//! FAIL-CLOSED
//! ===========
//! Every ambiguous condition — missing token, empty token, unreadable store —
//! collapses to [`SessionSignal::Absent`]. There is no error path out of a
//! read, and nothing here ever answers "authenticated" on a failure.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::RwLock;

/// Boolean-equivalent authentication signal derived from token presence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionSignal {
    /// A non-empty session token exists.
    Present,
    /// No token, an empty token, or an unreadable store.
    Absent,
}

impl SessionSignal {
    /// Derive the signal from an optional token value.
    ///
    /// `Present` iff the token is a non-empty string; no other part of the
    /// session is inspected.
    #[must_use]
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(t) if !t.is_empty() => Self::Present,
            _ => Self::Absent,
        }
    }

    /// True when the signal is [`SessionSignal::Present`].
    #[must_use]
    pub fn is_present(self) -> bool {
        self == Self::Present
    }
}

/// Read-only view of the current session signal.
///
/// `read` must reflect the most recently committed session state at call
/// time, perform no side effects, and never panic — an uninitialized or
/// cleared store yields [`SessionSignal::Absent`].
pub trait SessionObserver {
    fn read(&self) -> SessionSignal;
}

/// Shared token cell: the production [`SessionObserver`].
///
/// The external session-management collaborator writes the token after login
/// and clears it on logout; the gate only ever reads. A poisoned lock reads
/// as [`SessionSignal::Absent`] (fail-closed).
#[derive(Debug, Default)]
pub struct TokenStore {
    pub(crate) token: RwLock<Option<String>>,
}

impl TokenStore {
    /// Create an empty store (signal reads as `Absent`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a session token. An empty string still reads as `Absent`.
    pub fn set_token(&self, token: impl Into<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.into());
        }
    }

    /// Clear the session token (logout or session expiry).
    pub fn clear(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }
}

impl SessionObserver for TokenStore {
    fn read(&self) -> SessionSignal {
        self.token
            .read()
            .map_or(SessionSignal::Absent, |slot| SessionSignal::from_token(slot.as_deref()))
    }
}
