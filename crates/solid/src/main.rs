//! # Solid CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/solid/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Command handlers (commands.rs)                           │
//! │  - Terminal output (render.rs)                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (crates/solidapp/)                                 │
//! │  - Specifications + filter                                  │
//! │  - Journal + persistence                                    │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! Library behavior is unit tested inside `solidapp`. This crate's tests run
//! the built binary end to end with `assert_cmd`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
