//! # CLI Behavior
//!
//! This is **one possible UI client** for solidapp. The CLI is the only place
//! that knows about terminal I/O, exit codes, logging setup and output
//! formatting.
//!
//! ## Commands
//!
//! - `solid products [--color C] [--size S] [--catalog FILE]`: print the names
//!   of products matching every given criterion, in catalog order. Without a
//!   catalog file the built-in Apple/Tree/House catalog is used.
//! - `solid journal -e TEXT... [--remove N]... [--path FILE]`: build a
//!   journal, print it, save it, load it back and print what was loaded.
//!
//! ## Logging
//!
//! Diagnostics go to stderr through `tracing`. `RUST_LOG` wins when set;
//! otherwise the level is `warn`, or `debug` with `--verbose`.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the library and print output
//! - `render`: Output formatting
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

use anyhow::Result;
use setup::Commands;
use solidapp::config::SolidConfig;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = setup::parse_cli();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Products {
            color,
            size,
            catalog,
        } => commands::products(color, size, catalog.as_deref()),
        Commands::Journal {
            entries,
            remove,
            path,
        } => {
            let path = match path {
                Some(path) => path,
                None => SolidConfig::load()?.journal_path,
            };
            commands::journal(&entries, &remove, &path)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (e.g. in tests) is harmless; keep the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
