//! Switchboard - a command-line AI assistant with toggleable tool bundles
//!
//! Switchboard forwards user requests to a hosted language-model API and
//! exposes local file/shell tools plus a catalog of MCP server bundles that
//! can be activated and deactivated at runtime.

pub mod agent;
pub mod config;
pub mod error;
pub mod llm;
pub mod mcp;
pub mod project;
pub mod repl;
pub mod tools;

pub use error::{Result, SwitchboardError};
