//! CLI module for switchboard - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for the server catalog,
//! tool listing, configuration display, and the interactive chat modes.

pub mod commands;

pub use commands::Cli;
