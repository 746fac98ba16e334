use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use memento_pad_config::AppConfig;
use memento_pad_core::{Document, History, SavePolicy};
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

mod demo;
mod repl;

/// A text document with linear undo/redo history.
#[derive(Parser, Debug)]
#[command(name = "memento-pad", version, about)]
struct Cli {
    /// Path to the JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start with this content instead of the configured one.
    #[arg(long, conflicts_with = "file")]
    initial: Option<String>,

    /// Start with the contents of this file.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Discard redo snapshots when saving after an undo.
    #[arg(long)]
    truncate_redo: bool,

    #[command(subcommand)]
    command: Option<Mode>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Replay a sample editing session.
    Demo,
    /// Read commands from stdin (default).
    Repl,
}

/// Installs the global subscriber. `RUST_LOG` wins; otherwise the filter
/// starts at `info` and is swapped for the configured one once it is known.
fn init_logging() -> (reload::Handle<EnvFilter, Registry>, bool) {
    let from_env = EnvFilter::try_from_default_env().ok();
    let env_overrides = from_env.is_some();
    let (filter, handle) =
        reload::Layer::new(from_env.unwrap_or_else(|| EnvFilter::new("info")));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    (handle, env_overrides)
}

/// Applies command-line overrides on top of the loaded config.
fn apply_overrides(cli: &Cli, config: &mut AppConfig) {
    if cli.truncate_redo {
        config.history.save_policy = SavePolicy::TruncateRedo;
    }
}

/// Content the document starts with: `--initial`, then `--file`, then
/// the configured `initial_content`.
fn initial_content(cli: &Cli, config: &AppConfig) -> Result<String> {
    match (&cli.initial, &cli.file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        (None, None) => Ok(config.initial_content.clone()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging before the config so load warnings are visible
    let (log_handle, env_overrides) = init_logging();

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let mut config = AppConfig::load_or_create(&config_path);
    apply_overrides(&cli, &mut config);

    if !env_overrides {
        match EnvFilter::try_new(&config.log_filter) {
            Ok(filter) => log_handle
                .reload(filter)
                .context("Failed to apply configured log filter")?,
            Err(e) => tracing::warn!("Invalid log_filter `{}`: {e}", config.log_filter),
        }
    }

    tracing::info!(config = %config_path.display(), "Starting memento-pad");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Mode::Repl) {
        Mode::Demo => demo::run(&mut out, config.history)?,
        Mode::Repl => {
            let mut doc = Document::new(initial_content(&cli, &config)?);
            let mut history = History::with_config(&mut doc, config.history);
            let stdin = std::io::stdin();
            repl::run(stdin.lock(), &mut out, &mut history, &config.prompt)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("memento-pad").chain(args.iter().copied()))
            .expect("parse args")
    }

    fn config_with_initial(text: &str) -> AppConfig {
        AppConfig {
            initial_content: text.to_string(),
            ..AppConfig::default()
        }
    }

    // --- Initial content ---

    #[test]
    fn test_initial_flag_overrides_config() {
        let cli = parse(&["--initial", "from flag"]);
        let content = initial_content(&cli, &config_with_initial("from config")).unwrap();
        assert_eq!(content, "from flag");
    }

    #[test]
    fn test_file_flag_reads_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.txt");
        std::fs::write(&path, "line one\nline two\n").unwrap();

        let cli = parse(&["--file", path.to_str().unwrap()]);
        let content = initial_content(&cli, &config_with_initial("from config")).unwrap();
        assert_eq!(content, "line one\nline two\n");
    }

    #[test]
    fn test_config_is_fallback_without_flags() {
        let cli = parse(&[]);
        let content = initial_content(&cli, &config_with_initial("from config")).unwrap();
        assert_eq!(content, "from config");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let cli = parse(&["--file", path.to_str().unwrap()]);
        let err = initial_content(&cli, &AppConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), format!("Failed to read {}", path.display()));
    }

    #[test]
    fn test_initial_and_file_conflict() {
        let result =
            Cli::try_parse_from(["memento-pad", "--initial", "a", "--file", "b.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_initial_takes_priority_over_file() {
        // Unreachable from the command line, but the resolution order holds
        // for any `Cli` built directly.
        let mut cli = parse(&["--initial", "text"]);
        cli.file = Some(PathBuf::from("does-not-exist.txt"));
        assert_eq!(initial_content(&cli, &AppConfig::default()).unwrap(), "text");
    }

    // --- Overrides ---

    #[test]
    fn test_truncate_redo_overrides_policy() {
        let cli = parse(&["--truncate-redo"]);
        let mut config = AppConfig::default();
        apply_overrides(&cli, &mut config);
        assert_eq!(config.history.save_policy, SavePolicy::TruncateRedo);
    }

    #[test]
    fn test_policy_untouched_without_flag() {
        let cli = parse(&["demo"]);
        let mut config = AppConfig::default();
        config.history.save_policy = SavePolicy::TruncateRedo;
        apply_overrides(&cli, &mut config);
        assert_eq!(config.history.save_policy, SavePolicy::TruncateRedo);
        assert_eq!(cli.command, Some(Mode::Demo));
    }

    #[test]
    fn test_default_mode_is_repl() {
        let cli = parse(&[]);
        assert_eq!(cli.command.unwrap_or(Mode::Repl), Mode::Repl);
    }
}
