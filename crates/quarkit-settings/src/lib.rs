//! Quarkit Settings Crate
//!
//! Handles style configuration, its validation, and persistence as TOML or
//! JSON files.

pub mod config;
pub mod error;

pub use config::{
    EyeSettings, ModuleSettings, RenderSettings, StyleConfig, CONFIG_FILE_NAME, MAX_MARGIN,
};
pub use error::{SettingsError, SettingsResult};
