// src/config/mod.rs

//! Command files for misocmd.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a command file from disk (`loader.rs`).
//! - Validate basic invariants like non-empty names (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{CommandConfig, ConfigFile, OptionsSection, RawConfigFile};
pub use validate::validate_raw_config;
