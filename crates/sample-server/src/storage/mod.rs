//! Storage layer
//!
//! Items live in process memory only; everything is lost on restart.

pub mod memory;

pub use memory::ItemStore;
