//! Configuration module for sbom-refdiff.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust
//! use sbom_refdiff::config::AppConfig;
//! use sbom_refdiff::reports::ReportFormat;
//!
//! let config = AppConfig::builder()
//!     .output_format(ReportFormat::Json)
//!     .fail_on_change(true)
//!     .build();
//! assert!(config.behavior.fail_on_change);
//! ```
//!
//! # Configuration File
//!
//! Place a `.sbom-refdiff.yaml` file in your project root or `~/.config/sbom-refdiff/`:
//!
//! ```yaml
//! output:
//!   format: json
//! behavior:
//!   fail_on_change: true
//! ```

pub mod file;
mod types;
mod validation;

// Re-export main types
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, DiffConfig, DiffConfigBuilder, DiffPaths,
    LookupConfig, OutputConfig,
};
pub use validation::{ConfigError, Validatable};

// Re-export file utilities
pub use file::{
    ConfigFileError, discover_config_file, generate_full_example_config,
    load_config_file, load_or_default,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.sbom-refdiff.yaml` config files. It can be used by editors for
/// validation and autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
