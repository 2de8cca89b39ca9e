//! Tool system for LLM interactions
//!
//! Local tools provide file system access and command execution to the
//! chat dispatcher. Each session gets a ToolContext scoped to its
//! workspace directory. MCP server adapters implement the same trait.

mod context;
mod executor;
mod file_info;
mod file_ops;
mod find_files;
mod list_directory;
mod read_file;
mod run_command;
mod tree;
mod write_file;

pub use context::{ToolContext, ToolError};
pub use executor::ToolExecutor;

use async_trait::async_trait;
use serde_json::Value;

use crate::llm::ToolDefinition;

/// A tool that can be called by the LLM
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name (matches the LLM tool-call name)
    fn name(&self) -> &str;

    /// Human-readable description
    fn description(&self) -> &str;

    /// JSON Schema for input parameters
    fn input_schema(&self) -> Value;

    /// Execute the tool
    async fn execute(&self, input: Value, ctx: &ToolContext) -> Result<ToolResult, eyre::Error>;

    /// Definition advertised to the LLM
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(self.name(), self.description(), self.input_schema())
    }
}

/// Result from tool execution
#[derive(Debug, Clone)]
pub struct ToolResult {
    pub content: String,
    pub is_error: bool,
}

impl ToolResult {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: false,
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: true,
        }
    }
}

// Re-export individual tools for direct access if needed
pub use file_info::FileInfoTool;
pub use file_ops::FileOpsTool;
pub use find_files::FindFilesTool;
pub use list_directory::ListDirectoryTool;
pub use read_file::ReadFileTool;
pub use run_command::RunCommandTool;
pub use tree::DirectoryTreeTool;
pub use write_file::WriteFileTool;
