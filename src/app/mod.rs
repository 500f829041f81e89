//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Messages, TipRating, Settings)
//! - `controllers/` - Orchestration (ScreenController, ThemeController)
//! - `services/` - Business operations (tip engine)
//! - `infrastructure/` - External integrations (preference store, logging, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::screen::{Effect, ScreenController, ScreenView};
pub use controllers::theme::{DisplayMode, ThemeController};
pub use domain::{AppSettings, Message, RatingColor, TipRating};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::preferences::{JsonPreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use services::tip_engine::{TipBreakdown, classify_tip, compute_amounts, parse_bill_amount};
