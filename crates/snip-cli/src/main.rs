//! CLI entry point for the snip snippet picker.
//!
//! # Usage
//!
//! ```bash
//! snip [OPTIONS] [COMMAND]
//!
//! # Pick a snippet and print it to stdout
//! snip --folder ~/snippets
//!
//! # Insert a snippet into a file at line 12, column 5
//! snip --config snip.json pick --target src/main.rs --cursor 12:5
//!
//! # List snippets matching a query
//! snip --folder ~/snippets list log --json
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

mod surface;

use std::io::Write;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use serde::Serialize;
use snip_catalog::LocalFs;
use snip_core::{Config, DisplayRecord, NotificationLog};
use snip_picker::{InsertSnippetCommand, SearchFilter, SessionOutcome, insert_code_snippet};
use snip_tui::{TerminalPicker, Theme};
use tracing::info;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::surface::{CliSurface, Position};

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Pick a code snippet from your snippet folders and insert it.
///
/// Files under the configured folders are browsed page by page in a terminal
/// picker. The chosen file is inserted into `--target` or printed to stdout.
#[derive(Parser)]
#[command(name = "snip", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Command to execute. Defaults to `pick`.
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a JSON configuration file.
    #[arg(short, long, global = true, env = "SNIP_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Snippet folder to browse. Repeat to add more; replaces the configured list.
    #[arg(
        short,
        long = "folder",
        global = true,
        env = "SNIP_FOLDERS",
        value_delimiter = ','
    )]
    folders: Vec<String>,

    /// Number of entries per page.
    #[arg(long, global = true)]
    page_size: Option<usize>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long, global = true, env = "SNIP_LOG_FILE")]
    log_file: Option<Utf8PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Open the picker and insert the chosen snippet.
    Pick(PickArgs),

    /// Print the snippet catalog.
    List {
        /// Only list entries whose name or path contains this text.
        query: Option<String>,

        /// Print JSON instead of tab-separated lines.
        #[arg(long)]
        json: bool,
    },
}

/// Arguments of the `pick` command.
#[derive(clap::Args, Default)]
struct PickArgs {
    /// File to insert the snippet into. Without it, the snippet is printed.
    #[arg(short, long)]
    target: Option<Utf8PathBuf>,

    /// Insertion point in the target, as LINE:COL. Defaults to the end of the file.
    #[arg(long, requires = "target")]
    cursor: Option<Position>,

    /// Replace the text from the cursor up to LINE:COL.
    #[arg(long, requires = "cursor")]
    select_to: Option<Position>,

    /// Write a printed snippet to this file instead of stdout.
    #[arg(short, long, conflicts_with = "target")]
    output: Option<Utf8PathBuf>,
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `default_level`. The picker draws
/// on stderr, so `pick` keeps stderr logging to errors unless asked.
fn init_tracing(
    verbose: bool,
    no_color: bool,
    default_level: &str,
    log_file: Option<&Utf8Path>,
) -> color_eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { default_level };
        EnvFilter::new(format!("{level},mio=warn"))
    });

    let (writer, use_ansi) = match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| color_eyre::eyre::eyre!("Cannot open log file {path}: {e}"))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None => (
            BoxMakeWriter::new(std::io::stderr),
            !no_color && std::env::var("NO_COLOR").is_err(),
        ),
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(use_ansi)
                .with_writer(writer),
        )
        .with(filter)
        .init();
    Ok(())
}

/// Builds a [`Config`] from the configuration file and CLI overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read or an option is invalid.
fn build_config(cli: &Cli) -> color_eyre::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if !cli.folders.is_empty() {
        config.snippet_folders.clone_from(&cli.folders);
    }
    if let Some(page_size) = cli.page_size {
        config.picker.page_size = page_size;
    }

    config.validate()?;
    Ok(config)
}

fn theme_for(config: &Config, no_color: bool) -> Theme {
    if no_color || std::env::var("NO_COLOR").is_ok() {
        Theme::monochrome()
    } else {
        Theme::from_scheme(config.tui.color_scheme)
    }
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

/// Runs the picker and inserts the chosen snippet.
///
/// # Errors
///
/// Returns an error if the terminal fails or the result cannot be written.
async fn run_pick(config: &Config, args: &PickArgs, no_color: bool) -> color_eyre::Result<ExitCode> {
    let mut surface = match &args.target {
        Some(path) => CliSurface::open(path, args.cursor, args.select_to)
            .await
            .map_err(|e| color_eyre::eyre::eyre!("Cannot read target {path}: {e}"))?,
        None => CliSurface::detached(),
    };

    let fs = Arc::new(LocalFs::new(config.catalog.follow_links));
    let log = NotificationLog::new();
    let picker = TerminalPicker::new(theme_for(config, no_color));

    info!(folders = config.snippet_folders.len(), "Starting picker");
    let outcome = pick_until_signal(config, fs, &log, picker, &mut surface).await;
    flush_notifications(&log)?;

    match outcome? {
        Some(SessionOutcome::Inserted { path, kind }) => {
            info!(%path, ?kind, "Snippet inserted");
            surface
                .flush(
                    args.output.as_deref(),
                    &mut std::io::stdout(),
                    &mut std::io::stderr(),
                )
                .await?;
            Ok(ExitCode::SUCCESS)
        }
        Some(SessionOutcome::Dismissed) | None => Ok(ExitCode::SUCCESS),
        Some(SessionOutcome::NotShown | SessionOutcome::Failed(_)) => Ok(ExitCode::FAILURE),
    }
}

/// Resolves when the process receives SIGTERM. Never resolves off unix.
async fn terminate_signal() -> std::io::Result<()> {
    #[cfg(unix)]
    let received = {
        use tokio::signal::unix::{SignalKind, signal};

        signal(SignalKind::terminate())?.recv().await;
        Ok(())
    };

    #[cfg(not(unix))]
    let received = std::future::pending().await;

    received
}

/// Runs the picker session, ending early on SIGTERM.
///
/// Returns `None` if the session was interrupted. Dropping the session
/// restores the terminal.
async fn pick_until_signal(
    config: &Config,
    fs: Arc<LocalFs>,
    log: &NotificationLog,
    picker: TerminalPicker,
    surface: &mut CliSurface,
) -> color_eyre::Result<Option<SessionOutcome>> {
    tokio::select! {
        result = insert_code_snippet(config, fs, log, picker, surface) => Ok(Some(result?)),
        signal = terminate_signal() => {
            signal?;
            info!("Received SIGTERM, shutting down");
            Ok(None)
        }
    }
}

/// One catalog entry in `list --json` output.
#[derive(Serialize)]
struct ListedSnippet<'a> {
    name: &'a str,
    description: &'a str,
    path: &'a Utf8Path,
}

/// Prints the catalog, optionally filtered by `query`.
///
/// # Errors
///
/// Returns an error if output cannot be written.
async fn run_list(config: &Config, query: Option<&str>, json: bool) -> color_eyre::Result<ExitCode> {
    let fs = Arc::new(LocalFs::new(config.catalog.follow_links));
    let log = NotificationLog::new();

    let catalog = InsertSnippetCommand::new(config, fs, &log).load_catalog().await;
    flush_notifications(&log)?;
    let Ok(catalog) = catalog else {
        return Ok(ExitCode::FAILURE);
    };

    let records: Vec<DisplayRecord> = catalog.entries().iter().map(DisplayRecord::from_entry).collect();
    let selected: Vec<&DisplayRecord> = match query {
        Some(query) => SearchFilter::new(&records)
            .matches(query)
            .into_iter()
            .filter_map(|index| records.get(index))
            .collect(),
        None => records.iter().collect(),
    };
    info!(total = records.len(), shown = selected.len(), "Listed snippets");

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    if json {
        let listed: Vec<ListedSnippet<'_>> = selected
            .iter()
            .map(|record| ListedSnippet {
                name: &record.label,
                description: &record.description,
                path: &record.absolute_path,
            })
            .collect();
        serde_json::to_writer_pretty(&mut handle, &listed)?;
        writeln!(handle)?;
    } else {
        for record in selected {
            writeln!(handle, "{}\t{}", record.description, record.absolute_path)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

/// Prints collected notifications to stderr.
fn flush_notifications(log: &NotificationLog) -> std::io::Result<()> {
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    for notification in log.drain() {
        writeln!(
            handle,
            "{}: {}",
            notification.severity.label(),
            notification.message
        )?;
    }
    Ok(())
}

// =============================================================================
// MAIN
// =============================================================================

#[tokio::main]
async fn main() -> color_eyre::Result<ExitCode> {
    // Install color-eyre before anything can fail
    color_eyre::install()?;

    let cli = Cli::parse();

    let default_level = match cli.command {
        Some(Commands::List { .. }) => "info",
        Some(Commands::Pick(_)) | None => "error",
    };
    init_tracing(cli.verbose, cli.no_color, default_level, cli.log_file.as_deref())?;

    let config = build_config(&cli)?;

    match &cli.command {
        Some(Commands::List { query, json }) => run_list(&config, query.as_deref(), *json).await,
        Some(Commands::Pick(args)) => run_pick(&config, args, cli.no_color).await,
        None => run_pick(&config, &PickArgs::default(), cli.no_color).await,
    }
}
