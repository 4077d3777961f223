//! Core planning logic — types, parsing, classification, catalog, shopping list.

pub mod classifier;
pub mod error;
pub mod parser;
pub mod shopping;
pub mod store;
pub mod types;
