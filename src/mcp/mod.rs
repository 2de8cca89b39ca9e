//! MCP server catalog, activation management, and tool adapters
//!
//! The capability registry + toggle layer: a fixed catalog of named server
//! bundles, each independently enabled or disabled at runtime, feeding the
//! chat dispatcher.

pub mod adapter;
pub mod manager;
pub mod registry;

pub use adapter::McpTool;
pub use manager::ServerManager;
pub use registry::{ServerDescriptor, ServerRegistry};
