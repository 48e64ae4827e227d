//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `search`, `hospitals`) so pages and
//! components depend on small focused models provided through context.

pub mod hospitals;
pub mod search;
pub mod session;
