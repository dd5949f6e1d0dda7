//! Database module for SQLite operations.
//!
//! This module provides:
//! - Database initialization and schema migrations
//! - Repository layer for question and category queries

pub mod migrations;
pub mod repo;

pub use migrations::init_db;
pub use repo::Repository;
