//! Configuration module for Spendwise
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - Application settings persistence

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::Settings;
