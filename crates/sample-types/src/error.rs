//! Error types for item operations

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ItemError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("Item with id {0} not found")]
    NotFound(u64),
}

impl ItemError {
    /// The id the failed operation referenced
    pub fn id(&self) -> u64 {
        match self {
            ItemError::NotFound(id) => *id,
        }
    }
}
