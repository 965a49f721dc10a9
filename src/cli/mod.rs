//! CLI module for drafter - command-line arguments.
//!
//! There are no subcommands; running the binary starts a drafting session.

pub mod commands;

pub use commands::Cli;
