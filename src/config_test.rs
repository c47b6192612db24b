use super::*;

// =============================================================================
// GatePaths defaults
// =============================================================================

#[test]
fn default_login_path() {
    assert_eq!(GatePaths::default().login, "/login");
}

#[test]
fn default_home_path() {
    assert_eq!(GatePaths::default().home, "/");
}

#[test]
fn default_landing_path() {
    assert_eq!(GatePaths::default().default_landing, "/");
}

// =============================================================================
// env_path — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_path_unset_falls_back_to_default() {
    assert_eq!(env_path("__TEST_GATE_UNSET__", "/login"), "/login");
}

#[test]
fn env_path_set_overrides_default() {
    unsafe { std::env::set_var("__TEST_GATE_SET__", "/signin") };
    assert_eq!(env_path("__TEST_GATE_SET__", "/login"), "/signin");
    unsafe { std::env::remove_var("__TEST_GATE_SET__") };
}

#[test]
fn env_path_non_rooted_falls_back_to_default() {
    unsafe { std::env::set_var("__TEST_GATE_NON_ROOTED__", "signin") };
    assert_eq!(env_path("__TEST_GATE_NON_ROOTED__", "/login"), "/login");
    unsafe { std::env::remove_var("__TEST_GATE_NON_ROOTED__") };
}

#[test]
fn env_path_empty_falls_back_to_default() {
    unsafe { std::env::set_var("__TEST_GATE_EMPTY__", "") };
    assert_eq!(env_path("__TEST_GATE_EMPTY__", "/"), "/");
    unsafe { std::env::remove_var("__TEST_GATE_EMPTY__") };
}

// =============================================================================
// GatePaths::from_env
// =============================================================================

#[test]
fn from_env_unset_yields_defaults() {
    unsafe {
        std::env::remove_var("GATE_LOGIN_PATH");
        std::env::remove_var("GATE_HOME_PATH");
        std::env::remove_var("GATE_DEFAULT_LANDING");
    }
    assert_eq!(GatePaths::from_env(), GatePaths::default());
}

// =============================================================================
// GatePaths serde
// =============================================================================

#[test]
fn gate_paths_serde_round_trip() {
    let paths = GatePaths {
        login: "/signin".to_owned(),
        home: "/home".to_owned(),
        default_landing: "/dashboard".to_owned(),
    };
    let text = serde_json::to_string(&paths).unwrap();
    let restored: GatePaths = serde_json::from_str(&text).unwrap();
    assert_eq!(restored, paths);
}
