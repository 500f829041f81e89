//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - Theme state and persistence
//! - Screen event handling

pub mod screen;
pub mod theme;
