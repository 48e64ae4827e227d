//! Networking modules for the hospital REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `error` decodes response envelopes into a
//! tagged `Result`, and `types` defines the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
