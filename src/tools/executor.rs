//! Tool executor - manages tool registration and execution

use std::collections::HashMap;

use super::{
    DirectoryTreeTool, FileInfoTool, FileOpsTool, FindFilesTool, ListDirectoryTool, ReadFileTool, RunCommandTool,
    Tool, ToolContext, ToolResult, WriteFileTool,
};
use crate::llm::{ToolCall, ToolDefinition};

/// Manages tool execution for a chat session
pub struct ToolExecutor {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolExecutor {
    /// Create an executor with the basic file and shell tools
    pub fn basic() -> Self {
        let mut executor = Self::new();
        executor.add_tool(Box::new(ReadFileTool));
        executor.add_tool(Box::new(WriteFileTool));
        executor.add_tool(Box::new(ListDirectoryTool));
        executor.add_tool(Box::new(RunCommandTool));
        executor
    }

    /// Create an executor with the basic set plus the enhanced filesystem tools
    pub fn enhanced() -> Self {
        let mut executor = Self::basic();
        executor.add_tool(Box::new(FileInfoTool));
        executor.add_tool(Box::new(FileOpsTool));
        executor.add_tool(Box::new(DirectoryTreeTool));
        executor.add_tool(Box::new(FindFilesTool));
        executor
    }

    /// Create an empty executor (for custom tool sets)
    pub fn new() -> Self {
        Self { tools: HashMap::new() }
    }

    /// Add a tool to the executor
    pub fn add_tool(&mut self, tool: Box<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Remove a tool by name
    pub fn remove_tool(&mut self, name: &str) -> bool {
        self.tools.remove(name).is_some()
    }

    /// Get tool definitions for the LLM
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut defs: Vec<_> = self.tools.values().map(|t| t.definition()).collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    /// Execute a tool call
    pub async fn execute(&self, tool_call: &ToolCall, ctx: &ToolContext) -> ToolResult {
        match self.tools.get(&tool_call.name) {
            Some(tool) => match tool.execute(tool_call.arguments.clone(), ctx).await {
                Ok(result) => result,
                Err(e) => ToolResult::error(format!("Tool error: {}", e)),
            },
            None => ToolResult::error(format!("Unknown tool: {}", tool_call.name)),
        }
    }

    /// Execute multiple tool calls in order
    pub async fn execute_all(&self, tool_calls: &[ToolCall], ctx: &ToolContext) -> Vec<(String, ToolResult)> {
        let mut results = Vec::with_capacity(tool_calls.len());

        for call in tool_calls {
            let result = self.execute(call, ctx).await;
            results.push((call.id.clone(), result));
        }

        results
    }

    /// Check if a tool exists
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get the sorted list of tool names
    pub fn tool_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the executor has no tools
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolExecutor {
    fn default() -> Self {
        Self::enhanced()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_basic_executor_tools() {
        let executor = ToolExecutor::basic();

        assert!(executor.has_tool("read_file"));
        assert!(executor.has_tool("write_file"));
        assert!(executor.has_tool("list_directory"));
        assert!(executor.has_tool("run_command"));
        assert!(!executor.has_tool("file_info"));
        assert_eq!(executor.len(), 4);
    }

    #[test]
    fn test_enhanced_executor_tools() {
        let executor = ToolExecutor::enhanced();

        assert!(executor.has_tool("read_file"));
        assert!(executor.has_tool("file_info"));
        assert!(executor.has_tool("file_ops"));
        assert!(executor.has_tool("directory_tree"));
        assert!(executor.has_tool("find_files"));
        assert_eq!(executor.len(), 8);
    }

    #[test]
    fn test_definitions_sorted() {
        let executor = ToolExecutor::enhanced();
        let defs = executor.definitions();

        assert_eq!(defs.len(), 8);
        let names: Vec<_> = defs.iter().map(|d| d.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[tokio::test]
    async fn test_execute_unknown_tool() {
        let executor = ToolExecutor::basic();
        let dir = tempdir().unwrap();
        let ctx = ToolContext::new(dir.path().to_path_buf());

        let tool_call = ToolCall::new("call_1", "nonexistent_tool", serde_json::json!({}));

        let result = executor.execute(&tool_call, &ctx).await;
        assert!(result.is_error);
        assert!(result.content.contains("Unknown tool"));
    }

    #[tokio::test]
    async fn test_execute_all() {
        let executor = ToolExecutor::basic();
        let dir = tempdir().unwrap();
        let ctx = ToolContext::new(dir.path().to_path_buf());

        std::fs::write(dir.path().join("test.txt"), "Hello").unwrap();

        let tool_calls = vec![
            ToolCall::new("call_1", "read_file", serde_json::json!({"path": "test.txt"})),
            ToolCall::new("call_2", "list_directory", serde_json::json!({"path": "."})),
        ];

        let results = executor.execute_all(&tool_calls, &ctx).await;
        assert_eq!(results.len(), 2);

        let (id1, result1) = &results[0];
        assert_eq!(id1, "call_1");
        assert!(!result1.is_error);

        let (id2, result2) = &results[1];
        assert_eq!(id2, "call_2");
        assert!(!result2.is_error);
    }

    #[test]
    fn test_remove_tool() {
        let mut executor = ToolExecutor::basic();
        assert!(executor.remove_tool("run_command"));
        assert!(!executor.has_tool("run_command"));
        assert!(!executor.remove_tool("run_command"));
    }

    #[test]
    fn test_empty_executor() {
        let executor = ToolExecutor::new();
        assert!(executor.is_empty());
        assert!(executor.tool_names().is_empty());
        assert!(executor.definitions().is_empty());
    }
}
