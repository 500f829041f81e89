//! Services layer - business operations.
//!
//! - Tip arithmetic, rating classification and display formatting

pub mod tip_engine;
