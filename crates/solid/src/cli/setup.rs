use clap::{Parser, Subcommand};
use solidapp::model::{Color, Size};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "solid",
    bin_name = "solid",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Filter products by specification and keep a numbered journal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List products matching every given criterion
    Products {
        /// Only products of this color (red, green, blue)
        #[arg(long, value_parser = parse_color)]
        color: Option<Color>,

        /// Only products of this size (small, medium, large)
        #[arg(long, value_parser = parse_size)]
        size: Option<Size>,

        /// JSON catalog to filter instead of the built-in one
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Build a journal, save it and load it back
    Journal {
        /// Entry text, added in order (repeatable)
        #[arg(short = 'e', long = "entry")]
        entries: Vec<String>,

        /// Zero-based position to remove after adding (repeatable, applied in order)
        #[arg(short, long)]
        remove: Vec<usize>,

        /// File to save to (defaults to the configured journal path)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
}

fn parse_color(s: &str) -> Result<Color, String> {
    s.parse().map_err(|e: solidapp::SolidError| e.to_string())
}

fn parse_size(s: &str) -> Result<Size, String> {
    s.parse().map_err(|e: solidapp::SolidError| e.to_string())
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
