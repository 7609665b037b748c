//! Sample API Types
//!
//! Pure domain types shared by the server and any client: the item record,
//! the request body used to create or replace one, and the store error.

pub mod error;
pub mod item;

pub use error::{ItemError, Result};
pub use item::*;
