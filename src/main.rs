use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use indexmap::IndexMap;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use quillpad::config::{Config, StorePaths, TextSettings, WindowSettings};

/// Quillpad - inspect and edit the quillpad editor's stored preferences
#[derive(Parser)]
#[command(name = "quillpad")]
#[command(version)]
#[command(about = "Inspect and edit quillpad editor preferences", long_about = None)]
struct Cli {
    /// Directory holding the settings files (default: ~/.config/quillpad)
    #[arg(short, long, global = true)]
    config_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the effective preferences as TOML
    Show,
    /// Print the locations of the settings files
    Path,
    /// Put a file at the top of the recent-files list
    AddRecent {
        /// File path to record
        file: String,
    },
    /// Remember a cursor position for a file
    SetCursor {
        /// File path
        file: String,
        /// Character offset of the cursor
        pos: u64,
    },
    /// List custom shortcuts and the ones that will be dropped on save
    Shortcuts,
}

/// Installs a stderr subscriber.
///
/// `-v` flags pick the level. Without them the filter comes from
/// `QUILLPAD_LOG` (for example `quillpad=debug`), defaulting to warn.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env("QUILLPAD_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Shape of the `show` output.
#[derive(Serialize)]
struct Snapshot<'a> {
    window: &'a WindowSettings,
    text: &'a TextSettings,
    shortcuts: &'a IndexMap<String, String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = match cli.config_dir {
        Some(dir) => StorePaths::in_dir(dir),
        None => StorePaths::default_location()
            .context("Could not determine the home directory; pass --config-dir")?,
    };

    let mut config = Config::with_paths(Some(paths.clone()));
    config.read_config();
    config.read_shortcuts();

    match cli.command {
        Command::Show => {
            let snapshot = Snapshot {
                window: &config.window,
                text: &config.text,
                shortcuts: config.custom_shortcuts(),
            };
            let text = toml::to_string_pretty(&snapshot).context("Failed to render preferences")?;
            print!("{text}");
        }
        Command::Path => {
            println!("settings:         {}", paths.settings.display());
            println!("cursor positions: {}", paths.cursor_positions.display());
        }
        Command::AddRecent { file } => {
            if file.is_empty() {
                bail!("File path must not be empty");
            }
            config.add_recent_file(&file);
            config.write_config();
            for (i, recent) in config.text.recent_files().iter().enumerate() {
                println!("{:>2}. {recent}", i + 1);
            }
        }
        Command::SetCursor { file, pos } => {
            config.read_cursor_pos();
            config.save_cursor_pos(&file, pos);
            config.write_cursor_pos();
            println!("{file}: {pos}");
        }
        Command::Shortcuts => {
            for (action, shortcut) in config.custom_shortcuts() {
                println!("{action} = {shortcut}");
            }
            for action in config.removed_actions() {
                println!("{action} (invalid, dropped on next save)");
            }
        }
    }

    Ok(())
}
