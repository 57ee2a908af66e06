//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The session store is the only cross-cutting state; per-page data (post
//! lists, comment threads) lives in page-local signals so routes stay
//! independent.

pub mod session;
