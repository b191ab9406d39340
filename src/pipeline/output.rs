//! Output handling for SBOM reports.

use anyhow::{Context, Result};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;

/// Target for output - either stdout or a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to stdout
    Stdout,
    /// Write to a file
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => Self::File(p),
            None => Self::Stdout,
        }
    }

    /// Check if output is to a terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stdout) && std::io::stdout().is_terminal()
    }
}

/// Determine if color should be used based on flags and environment
pub fn should_use_color(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var("NO_COLOR").is_err()
}

/// Write output to the target (stdout or file)
///
/// A trailing newline is added when non-empty `content` does not already end
/// with one.
pub fn write_output(content: &str, target: &OutputTarget, quiet: bool) -> Result<()> {
    let needs_newline = !content.is_empty() && !content.ends_with('\n');
    match target {
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| if needs_newline { stdout.write_all(b"\n") } else { Ok(()) })
                .and_then(|()| stdout.flush())
                .context("Failed to write output to stdout")
        }
        OutputTarget::File(path) => {
            let mut body = content.to_string();
            if needs_newline {
                body.push('\n');
            }
            std::fs::write(path, body)
                .with_context(|| format!("Failed to write output to {:?}", path))?;
            if !quiet {
                tracing::info!("Differences written to {}", path.display());
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_target_from_option_none() {
        let target = OutputTarget::from_option(None);
        assert!(matches!(target, OutputTarget::Stdout));
    }

    #[test]
    fn test_output_target_from_option_some() {
        let path = PathBuf::from("/tmp/test.json");
        let target = OutputTarget::from_option(Some(path.clone()));
        assert_eq!(target, OutputTarget::File(path));
    }

    #[test]
    fn test_file_target_is_not_terminal() {
        assert!(!OutputTarget::File(PathBuf::from("out.txt")).is_terminal());
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_output("line", &OutputTarget::File(path.clone()), true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "line\n");

        write_output("done\n", &OutputTarget::File(path.clone()), true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "done\n");

        write_output("", &OutputTarget::File(path.clone()), true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_write_output_bad_directory() {
        let target = OutputTarget::File(PathBuf::from("/nonexistent/dir/out.txt"));
        assert!(write_output("x", &target, true).is_err());
    }

    #[test]
    fn test_should_use_color_with_flag() {
        assert!(!should_use_color(true));
    }

    #[test]
    fn test_should_use_color_without_flag() {
        // This depends on NO_COLOR env var
        let expected = std::env::var("NO_COLOR").is_err();
        assert_eq!(should_use_color(false), expected);
    }
}
