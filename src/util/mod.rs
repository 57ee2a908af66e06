//! Pure helpers shared across pages and components.

pub mod comments;
pub mod guard;
pub mod pagination;
pub mod storage;
pub mod time;
