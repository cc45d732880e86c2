//! Configuration module for MoneyCount
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::MoneyCountPaths;
pub use settings::Settings;
