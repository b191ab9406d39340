//! sbom-refdiff: component-level SBOM diff with source line locations
//!
//! Compares the `components` of two CycloneDX-style JSON documents by the
//! `bom-ref` prefix and reports where each change sits in the original text.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use sbom_refdiff::{
    cli,
    config::{AppConfig, DiffConfig, DiffPaths, file as config_file},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sbom-refdiff")]
#[command(author = "Binarly.io")]
#[command(version)]
#[command(about = "Component-level SBOM diff with source line locations", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  No changes detected (or --fail-on-change not set)
    1  Changes detected with --fail-on-change
    3  Error occurred

EXAMPLES:
    # Print differences to the terminal
    sbom-refdiff diff old.cdx.json new.cdx.json

    # Write differences to a file
    sbom-refdiff diff old.cdx.json new.cdx.json -O differences.txt

    # CI/CD pipeline check
    sbom-refdiff diff old.cdx.json new.cdx.json -o summary --fail-on-change")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `diff` subcommand
#[derive(Parser)]
struct DiffArgs {
    /// Path to the old/baseline SBOM
    old: PathBuf,

    /// Path to the new SBOM
    new: PathBuf,

    /// Output format [default: text, or the config file's value]
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 if any changes detected
    #[arg(long)]
    fail_on_change: bool,

    /// Log every line lookup at trace level (use with RUST_LOG=trace)
    #[arg(long)]
    trace_lookups: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare the components of two SBOMs
    Diff(DiffArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .sbom-refdiff.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for reports
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(cli) {
        Ok(exit_code) => {
            if exit_code != exit_codes::SUCCESS {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

/// Dispatch to command handlers, returning the process exit code.
fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Diff(args) => {
            let overrides = AppConfig::builder()
                .output_file(args.output_file)
                .no_color(cli.no_color)
                .fail_on_change(args.fail_on_change)
                .quiet(cli.quiet)
                .trace_lookups(args.trace_lookups)
                .build();

            let (mut app_config, loaded_from) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
            if let Some(path) = &loaded_from {
                tracing::debug!("Loaded config from {}", path.display());
            }
            if let Some(format) = args.output {
                app_config.output.format = format;
            }

            let config = DiffConfig::from_app(
                DiffPaths {
                    old: args.old,
                    new: args.new,
                },
                app_config,
            );

            cli::run_diff(config)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "sbom-refdiff", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = sbom_refdiff::config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) =
                    sbom_refdiff::config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml =
                    serde_yaml_ng::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for path in config_file::search_locations() {
                    eprintln!("  {}", path.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in config_file::config_file_names() {
                    eprintln!("  {name}");
                }
                eprintln!();
                match sbom_refdiff::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".sbom-refdiff.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = sbom_refdiff::config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_diff_args_parse() {
        let cli = Cli::try_parse_from([
            "sbom-refdiff",
            "diff",
            "old.json",
            "new.json",
            "-o",
            "json",
            "-O",
            "out.json",
            "--fail-on-change",
            "--no-color",
        ])
        .unwrap();

        assert!(cli.no_color);
        match cli.command {
            Commands::Diff(args) => {
                assert_eq!(args.output, Some(ReportFormat::Json));
                assert_eq!(args.output_file, Some(PathBuf::from("out.json")));
                assert!(args.fail_on_change);
                assert!(!args.trace_lookups);
            }
            _ => panic!("Expected diff command"),
        }
    }

    #[test]
    fn test_unknown_format_rejected() {
        let parsed = Cli::try_parse_from(["sbom-refdiff", "diff", "a", "b", "-o", "sarif"]);
        assert!(parsed.is_err());
    }
}
