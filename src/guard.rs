//! Authorization gate: the per-navigation decision tables.
//!
//! ARCHITECTURE
//! ============
//! Every navigation event evaluates a [`Guard`] before the destination view
//! mounts. Evaluation reads the session signal exactly once, applies the
//! variant's table, and returns a [`GuardDecision`] synchronously — no
//! retries, no polling, no pending state. Each evaluation is memoryless, so
//! re-evaluating with unchanged inputs yields the identical decision.
//!
//! TRADE-OFFS
//! ==========
//! Both redirect outcomes demand history-replacing navigation from the router
//! host; this favors a clean back stack over being able to back-navigate into
//! a denied attempt.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use serde::{Deserialize, Serialize};

use crate::config::GatePaths;
use crate::location::{Location, NavigationIntent};
use crate::session::{SessionObserver, SessionSignal};

/// Outcome of evaluating a guard for one navigation.
///
/// Computed fresh on every evaluation, never cached. Redirect variants must
/// be issued as history-replacing navigations, not pushes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GuardDecision {
    /// Render the nested content.
    Allow,
    /// Redirect to the login path, carrying the denied location for replay.
    RedirectToLogin(NavigationIntent),
    /// Redirect to the home path.
    RedirectToHome,
}

impl GuardDecision {
    /// True when the decision renders the nested content.
    #[must_use]
    pub fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// The carried navigation intent, if this is a login redirect.
    #[must_use]
    pub fn intent(&self) -> Option<&NavigationIntent> {
        match self {
            Self::RedirectToLogin(intent) => Some(intent),
            Self::Allow | Self::RedirectToHome => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::RedirectToLogin(_) => "redirect_to_login",
            Self::RedirectToHome => "redirect_to_home",
        }
    }
}

/// The two gate variants, differing only in which decision table they apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Guard {
    /// Requires a session: absent visitors are sent to login with their
    /// denied location attached.
    Protected,
    /// Guest-only content (e.g. the login form): authenticated visitors are
    /// sent home.
    GuestOnly,
}

impl Guard {
    /// Evaluate this guard for one navigation.
    ///
    /// Reads the session signal exactly once and applies the table:
    ///
    /// | variant   | present          | absent                        |
    /// |-----------|------------------|-------------------------------|
    /// | Protected | `Allow`          | `RedirectToLogin` with intent |
    /// | GuestOnly | `RedirectToHome` | `Allow`                       |
    ///
    /// On denial the full location (path, query, transient state) is carried
    /// verbatim in the intent.
    #[must_use]
    pub fn evaluate(self, session: &impl SessionObserver, location: &Location) -> GuardDecision {
        let signal = session.read();
        let decision = match (self, signal) {
            (Self::Protected, SessionSignal::Present) | (Self::GuestOnly, SessionSignal::Absent) => {
                GuardDecision::Allow
            }
            (Self::Protected, SessionSignal::Absent) => {
                GuardDecision::RedirectToLogin(NavigationIntent::new(location.clone()))
            }
            (Self::GuestOnly, SessionSignal::Present) => GuardDecision::RedirectToHome,
        };
        tracing::debug!(
            guard = ?self,
            path = %location.full_path(),
            decision = decision.label(),
            "route guard evaluated"
        );
        decision
    }
}

/// Resolve where to navigate after a successful login.
///
/// This is the one contract the gate imposes on the login flow: replay the
/// carried intent if there is one, otherwise fall back to the configured
/// default landing location. The intent is consumed here — it does not
/// survive the redirect cycle.
#[must_use]
pub fn landing_after_login(intent: Option<NavigationIntent>, paths: &GatePaths) -> Location {
    match intent {
        Some(intent) => intent.into_location(),
        None => Location::new(paths.default_landing.clone()),
    }
}
