//! # Binz CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! - `cli/setup.rs`: clap argument definitions and the version string
//! - `cli/commands.rs`: context wiring, logging setup and per-command handlers
//! - `cli/render.rs`: terminal output (colors, tables, labels)

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
