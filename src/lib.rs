//! # routegate
//!
//! Route authorization gate: the decision procedure that determines, on every
//! navigation, whether a visitor may see a given screen based on session-token
//! presence, and that preserves navigational intent across a login round-trip.
//!
//! DESIGN
//! ======
//! The gate is a pure function of two inputs — the session signal and the
//! current location — and returns a tagged [`guard::GuardDecision`] that the
//! router host consumes. Session state is an injected [`session::SessionObserver`],
//! never ambient global state, so the gate stays testable with a fake store.
//!
//! Token issuance, refresh, credential validation, and transport security are
//! out of scope; the gate only consumes a token-presence signal.

pub mod config;
pub mod guard;
pub mod location;
pub mod session;

pub use config::GatePaths;
pub use guard::{Guard, GuardDecision, landing_after_login};
pub use location::{Location, LocationError, NavigationIntent};
pub use session::{SessionObserver, SessionSignal, TokenStore};
