use super::*;

#[test]
fn new_trims_trailing_slashes() {
    let config = ApiConfig::new("http://api.test/v1//");
    assert_eq!(config.base_url, "http://api.test/v1");
}

#[test]
fn url_joins_with_single_slash() {
    let config = ApiConfig::new("http://api.test/v1/");
    assert_eq!(config.url("/auth/me"), "http://api.test/v1/auth/me");
    assert_eq!(config.url("hospitals"), "http://api.test/v1/hospitals");
}

#[test]
fn resolve_prefers_override() {
    let config = ApiConfig::resolve(Some("https://staging.test/api"), false);
    assert_eq!(config.base_url, "https://staging.test/api");
}

#[test]
fn resolve_ignores_blank_override() {
    assert_eq!(ApiConfig::resolve(Some("   "), true).base_url, DEV_API_BASE_URL);
}

#[test]
fn resolve_picks_backend_by_build_profile() {
    assert_eq!(ApiConfig::resolve(None, true).base_url, DEV_API_BASE_URL);
    assert_eq!(ApiConfig::resolve(None, false).base_url, PROD_API_BASE_URL);
}

#[test]
fn debounce_interval_is_300ms() {
    assert_eq!(SEARCH_DEBOUNCE.as_millis(), 300);
}

#[test]
fn theme_and_token_use_separate_storage_keys() {
    assert_ne!(THEME_STORAGE_KEY, TOKEN_STORAGE_KEY);
}
