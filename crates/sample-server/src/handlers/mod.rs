//! HTTP handlers

pub mod items;
pub mod root;

pub use root::{health, method_not_allowed, not_found, root};
