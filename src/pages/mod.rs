//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, guards, form state)
//! and delegates rendering details to `components`.

pub mod categories;
pub mod dashboard;
pub mod login;
pub mod media;
pub mod post;
pub mod posts;
pub mod register;
pub mod tags;
