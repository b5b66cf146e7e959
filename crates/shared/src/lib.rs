//! Shared types, errors, and configuration for Niaga.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Decimal amount rendering for KPI display
//! - The static locale label table
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod locale;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use locale::{Labels, Locale};
