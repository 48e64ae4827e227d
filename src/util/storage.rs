//! Durable bearer-token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly one key (`config::TOKEN_STORAGE_KEY`) holds the token; its absence
//! means the browser is logged out. The session store is the only writer.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::{Arc, Mutex, PoisonError};

#[cfg(feature = "hydrate")]
use crate::config::TOKEN_STORAGE_KEY;

/// Key-value slot for the bearer token.
pub trait TokenStorage {
    fn load(&self) -> Option<String>;
    fn store(&self, token: &str);
    fn clear(&self);
}

/// `window.localStorage` backed storage. No-op during SSR.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserTokenStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStorage for BrowserTokenStorage {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(TOKEN_STORAGE_KEY)
                .ok()
                .flatten()
                .filter(|token| !token.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn store(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
                    leptos::logging::warn!("token storage: write rejected");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_STORAGE_KEY);
            }
        }
    }
}

/// In-process storage shared between clones.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStorage {
    pub fn with_token(token: &str) -> Self {
        Self { slot: Arc::new(Mutex::new(Some(token.to_owned()))) }
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn store(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
