//! Configuration validation for sbom-refdiff.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AppConfig, DiffConfig, DiffPaths, OutputConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        self.output.validate()
    }
}

impl Validatable for DiffConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = self.paths.validate();
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for DiffPaths {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for (field, path) in [("paths.old", &self.old), ("paths.new", &self.new)] {
            if path.as_os_str().is_empty() {
                errors.push(ConfigError {
                    field: field.to_string(),
                    message: "Path must not be empty".to_string(),
                });
            }
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file {
            if file_path.is_dir() {
                errors.push(ConfigError {
                    field: "output.file".to_string(),
                    message: format!("Output path is a directory: {}", file_path.display()),
                });
            } else if let Some(parent) = file_path.parent()
                && !parent.as_os_str().is_empty()
                && !parent.exists()
            {
                errors.push(ConfigError {
                    field: "output.file".to_string(),
                    message: format!("Parent directory does not exist: {}", parent.display()),
                });
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiffConfigBuilder;
    use std::path::PathBuf;

    #[test]
    fn test_output_config_missing_parent() {
        let config = OutputConfig {
            file: Some(PathBuf::from("/nonexistent/dir/report.txt")),
            ..Default::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "output.file");
    }

    #[test]
    fn test_output_config_directory_target() {
        let tmp = tempfile::tempdir().unwrap();
        let config = OutputConfig {
            file: Some(tmp.path().to_path_buf()),
            ..Default::default()
        };
        assert!(!config.is_valid());
    }

    #[test]
    fn test_output_config_relative_file_ok() {
        let config = OutputConfig {
            file: Some(PathBuf::from("report.txt")),
            ..Default::default()
        };
        assert!(config.is_valid());
    }

    #[test]
    fn test_diff_config_empty_paths() {
        let config = DiffConfigBuilder::new()
            .old_path(PathBuf::new())
            .new_path(PathBuf::from("new.json"))
            .build()
            .unwrap();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "paths.old");
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError {
            field: "output.file".to_string(),
            message: "bad".to_string(),
        };
        assert_eq!(error.to_string(), "output.file: bad");
    }

    #[test]
    fn test_app_config_validation() {
        assert!(AppConfig::default().is_valid());
    }
}
