//! API endpoint configuration and fixed client constants.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment, so the backend base URL is
//! resolved at compile time from `HOSPITAL_API_BASE_URL`, falling back to the
//! local dev backend in debug builds and the hosted backend in release builds.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEV_API_BASE_URL: &str = "http://localhost:3001/api/v1";
pub const PROD_API_BASE_URL: &str = "https://hospital-management-backend-27yr.onrender.com/api/v1";

/// Durable-storage key holding the bearer token. Absence means logged out.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Durable-storage key holding an explicit light/dark choice.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Quiet period before a search keystroke turns into a fetch.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Delay between a successful delete notice and the redirect home.
pub const DELETE_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

pub const PASSWORD_MIN_LEN: usize = 6;

pub const DEMO_EMAIL: &str = "vikash@gmail.com";
pub const DEMO_PASSWORD: &str = "vikash123";

/// Base URL of the hospital REST backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    /// Build config from `HOSPITAL_API_BASE_URL` (captured at compile time).
    pub fn from_env() -> Self {
        Self::resolve(option_env!("HOSPITAL_API_BASE_URL"), cfg!(debug_assertions))
    }

    fn resolve(override_url: Option<&str>, debug: bool) -> Self {
        match override_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => Self::new(url),
            None if debug => Self::new(DEV_API_BASE_URL),
            None => Self::new(PROD_API_BASE_URL),
        }
    }

    /// Join an endpoint path (e.g. `/auth/me`) onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
