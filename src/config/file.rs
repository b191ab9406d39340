//! Configuration file loading and discovery.
//!
//! A config file is looked up by name in a short list of directories; the
//! first hit wins and is parsed as YAML into an [`AppConfig`].

use super::types::AppConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Recognized config file names, in preference order within a directory.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".sbom-refdiff.yaml",
    ".sbom-refdiff.yml",
    "sbom-refdiff.yaml",
    "sbom-refdiff.yml",
];

/// Directory under the user config dir that may hold a config file.
const CONFIG_DIR_NAME: &str = "sbom-refdiff";

/// Config file names recognized in each search location.
#[must_use]
pub const fn config_file_names() -> &'static [&'static str] {
    CONFIG_FILE_NAMES
}

/// Directories searched for a config file, in discovery order:
/// the current directory, the enclosing git root, the user config
/// directory (`~/.config/sbom-refdiff/`), then the home directory.
///
/// Directories that cannot be determined are skipped.
#[must_use]
pub fn search_locations() -> Vec<PathBuf> {
    let cwd = std::env::current_dir().ok();
    let git_root = cwd.as_deref().and_then(find_git_root);

    let mut locations: Vec<PathBuf> = Vec::new();
    let candidates = [
        cwd,
        git_root,
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME)),
        dirs::home_dir(),
    ];
    for dir in candidates.into_iter().flatten() {
        if !locations.contains(&dir) {
            locations.push(dir);
        }
    }
    locations
}

/// Resolve the config file to use.
///
/// An explicit path wins when it exists; otherwise the first match across
/// [`search_locations`] is returned.
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path.filter(|p| p.exists()) {
        return Some(path.to_path_buf());
    }

    search_locations()
        .iter()
        .find_map(|dir| find_config_in_dir(dir))
}

fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Nearest ancestor of `start` (inclusive) containing a `.git` entry.
fn find_git_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml_ng::from_str(&content)?)
}

/// Load the discovered config file, falling back to defaults.
///
/// A file that exists but fails to load is logged and ignored.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    let Some(path) = discover_config_file(explicit_path) else {
        return (AppConfig::default(), None);
    };

    match load_config_file(&path) {
        Ok(config) => (config, Some(path)),
        Err(e) => {
            tracing::warn!("Ignoring config file {}: {e}", path.display());
            (AppConfig::default(), None)
        }
    }
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// This is useful for layering CLI args over file config.
    pub fn merge(&mut self, other: &Self) {
        // Output config - only override if explicitly set
        if other.output.format != crate::reports::ReportFormat::default() {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }

        // Behavior config (booleans - if set to true, override)
        if other.behavior.fail_on_change {
            self.behavior.fail_on_change = true;
        }
        if other.behavior.quiet {
            self.behavior.quiet = true;
        }

        if other.lookup.trace {
            self.lookup.trace = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# SBOM Reference Diff Configuration File
# ========================================
#
# This file configures sbom-refdiff behavior. Place it at:
#   - .sbom-refdiff.yaml in your project root
#   - ~/.config/sbom-refdiff/sbom-refdiff.yaml for global config
#
# CLI arguments always override file settings.

# Output configuration
output:
  # Format: text, json, summary
  format: text
  # Output file path (omit for stdout)
  # file: differences.txt
  # Disable colored output
  no_color: false

# Behavior flags
behavior:
  # Exit with code 1 if any changes detected
  fail_on_change: false
  # Suppress non-essential output
  quiet: false

# Line lookup diagnostics
lookup:
  # Log every line lookup at trace level (needs RUST_LOG=trace)
  trace: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
