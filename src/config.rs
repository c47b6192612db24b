//! Redirect target configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// Paths the router host redirects to on guard decisions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatePaths {
    /// Target of `RedirectToLogin`.
    pub login: String,
    /// Target of `RedirectToHome`.
    pub home: String,
    /// Post-login landing when no navigation intent was carried.
    pub default_landing: String,
}

impl Default for GatePaths {
    fn default() -> Self {
        Self {
            login: "/login".to_owned(),
            home: "/".to_owned(),
            default_landing: "/".to_owned(),
        }
    }
}

pub(crate) fn env_path(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|raw| raw.starts_with('/'))
        .unwrap_or_else(|| default.to_owned())
}

impl GatePaths {
    /// Load from `GATE_LOGIN_PATH`, `GATE_HOME_PATH`, `GATE_DEFAULT_LANDING`.
    ///
    /// Unset or non-rooted values fall back to the defaults (`/login`, `/`,
    /// `/`).
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            login: env_path("GATE_LOGIN_PATH", &defaults.login),
            home: env_path("GATE_HOME_PATH", &defaults.home),
            default_landing: env_path("GATE_DEFAULT_LANDING", &defaults.default_landing),
        }
    }
}
