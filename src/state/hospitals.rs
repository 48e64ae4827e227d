//! Page-scoped load state for the hospital listing, detail and edit pages.
//!
//! DESIGN
//! ======
//! Pages hold a `Load<T>` signal and fold each fetch result into it with the
//! helpers below, so error wording lives here rather than in view code.

#[cfg(test)]
#[path = "hospitals_test.rs"]
mod hospitals_test;

use crate::net::error::ApiError;
use crate::net::types::Hospital;
use crate::state::search::SearchState;

pub const LISTING_FAILED_MESSAGE: &str = "Failed to fetch hospitals. Please try again later.";
pub const DETAIL_FAILED_MESSAGE: &str = "Failed to fetch hospital details";
pub const NOT_FOUND_MESSAGE: &str = "Hospital not found";
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create hospital. Please try again.";
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update hospital. Please try again.";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete hospital";
pub const DELETE_SUCCESS_MESSAGE: &str = "Hospital deleted successfully";

/// Fetch lifecycle for one page resource.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Load<T> {
    #[default]
    Loading,
    Ready(T),
    NotFound,
    Failed(String),
}

impl<T> Load<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Load::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Load::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Inline message for the error states.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Load::NotFound => Some(NOT_FOUND_MESSAGE),
            Load::Failed(message) => Some(message.as_str()),
            Load::Loading | Load::Ready(_) => None,
        }
    }
}

/// Generation counter for a page resource refetched when its route param
/// changes. Only the latest fetch may write the page's `Load`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchSeq(u64);

impl FetchSeq {
    /// Start a fetch, superseding every earlier one. Returns its tag.
    pub fn begin(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, tag: u64) -> bool {
        self.0 == tag
    }
}

pub fn listing_load(result: Result<Vec<Hospital>, ApiError>) -> Load<Vec<Hospital>> {
    match result {
        Ok(hospitals) => Load::Ready(hospitals),
        Err(e) => {
            leptos::logging::warn!("hospital listing failed: {e}");
            Load::Failed(LISTING_FAILED_MESSAGE.to_owned())
        }
    }
}

pub fn detail_load(result: Result<Hospital, ApiError>) -> Load<Hospital> {
    match result {
        Ok(hospital) => Load::Ready(hospital),
        Err(ApiError::NotFound(_)) => Load::NotFound,
        Err(e) => {
            leptos::logging::warn!("hospital detail failed: {e}");
            Load::Failed(DETAIL_FAILED_MESSAGE.to_owned())
        }
    }
}

/// Heading above the grid: search results when a search is active.
pub fn listing_heading(search: &SearchState) -> String {
    match (&search.results, &search.results_query) {
        (Some(_), Some(query)) => format!("Search Results for \"{query}\""),
        _ => "Available Hospitals".to_owned(),
    }
}

pub fn result_summary(count: usize) -> String {
    match count {
        0 => "No hospitals found. Try a different city.".to_owned(),
        1 => "Found 1 hospital".to_owned(),
        n => format!("Found {n} hospitals"),
    }
}

/// Transient banner shown after a mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(message) | Notice::Error(message) => message,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Notice::Success(_) => "notice notice--success",
            Notice::Error(_) => "notice notice--error",
        }
    }
}

pub fn delete_notice(result: &Result<(), ApiError>) -> Notice {
    match result {
        Ok(()) => Notice::Success(DELETE_SUCCESS_MESSAGE.to_owned()),
        Err(e) => Notice::Error(e.message_or(DELETE_FAILED_MESSAGE)),
    }
}
