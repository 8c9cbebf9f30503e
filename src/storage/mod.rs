//! Storage layer for the rollkeeper player store
//!
//! This module provides a clean abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Data structures and the identity seam
//! - `schema`: Database connection and schema management
//! - `queries`: The store operations

pub mod models;
pub mod queries;
pub mod schema;

#[cfg(test)]
mod tests;

// Re-export the main types and store struct for easy access
pub use models::*;
pub use queries::RETENTION_DAYS;
pub use schema::PlayerStore;
