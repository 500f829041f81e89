//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Key-value preference storage
//! - Logging setup
//! - Error types

pub mod error;
pub mod logging;
pub mod preferences;
