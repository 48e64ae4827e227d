//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, timers, colour scheme) and pure rules
//! (validation, route guarding) from page and component logic so both can be
//! tested natively.

pub mod debounce;
pub mod guard;
pub mod storage;
pub mod theme;
pub mod validation;
