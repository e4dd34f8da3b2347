//! Common test utilities and helpers
//!
//! This module provides shared utilities for database-backed tests:
//! - Database test fixtures

pub mod database;
