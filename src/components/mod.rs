//! Reusable view components.

pub mod comment_thread;
pub mod header;
pub mod pagination;
pub mod post_card;
