//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - servers/info/demo: MCP server catalog
//! - tools: available tool listing
//! - config: effective configuration
//! - chat/dev: interactive sessions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Switchboard - AI assistant with toggleable MCP tool bundles
#[derive(Parser, Debug)]
#[command(name = "switchboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional KEY=VALUE config overlay file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute (defaults to chat)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all registered MCP servers
    Servers,

    /// Show detailed information about one MCP server
    Info {
        /// Server slug (e.g. browser, huggingface)
        name: String,
    },

    /// Show each server's capabilities with example prompts
    Demo,

    /// List all available tools
    Tools,

    /// Show the effective configuration
    Config,

    /// Start an interactive chat session
    Chat {
        /// Disable the enhanced filesystem tools
        #[arg(long)]
        no_enhanced: bool,

        /// Enable in-chat MCP server toggling
        #[arg(long)]
        mcp: bool,

        /// Sampling temperature override (0.0-2.0)
        #[arg(short, long)]
        temperature: Option<f32>,

        /// Response token limit override
        #[arg(long)]
        max_tokens: Option<u32>,
    },

    /// Start project-aware development mode
    Dev {
        /// Project directory (defaults to current)
        #[arg(long)]
        project_path: Option<PathBuf>,

        /// Sampling temperature override (0.0-2.0)
        #[arg(short, long)]
        temperature: Option<f32>,

        /// Response token limit override
        #[arg(long)]
        max_tokens: Option<u32>,
    },
}
