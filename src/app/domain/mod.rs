//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Tip rating bands and their color tokens
//! - Application settings
//! - Message types for the event system

pub mod messages;
pub mod rating;
pub mod settings;

pub use messages::Message;
pub use rating::{RatingColor, TipRating};
pub use settings::AppSettings;
