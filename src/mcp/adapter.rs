//! Placeholder adapters for remote MCP tools
//!
//! The remote servers are opaque collaborators; an adapter stands in for
//! one declared tool and reports what it would forward. Registration,
//! activation bookkeeping, and the advertised tool list are real.

use async_trait::async_trait;
use serde_json::Value;

use crate::mcp::registry::ServerDescriptor;
use crate::tools::{Tool, ToolContext, ToolResult};

/// Adapter for a single tool declared by an MCP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McpTool {
    server: String,
    title: String,
    tool: String,
    name: String,
    description: String,
    arg: &'static str,
}

impl McpTool {
    /// Create the adapter for one declared tool
    pub fn new(descriptor: &ServerDescriptor, tool: &str) -> Self {
        Self {
            server: descriptor.name.to_string(),
            title: descriptor.title.to_string(),
            tool: tool.to_string(),
            // Qualified so adapters from different servers never collide
            name: format!("{}_{}", descriptor.name, tool),
            description: format!("Invoke '{}' on the {} MCP server", tool, descriptor.title),
            arg: descriptor.arg,
        }
    }

    /// All adapters for a server's declared tools, in catalog order
    pub fn for_server(descriptor: &ServerDescriptor) -> Vec<Self> {
        descriptor.tools.iter().map(|t| Self::new(descriptor, t)).collect()
    }

    /// Slug of the owning server
    pub fn server(&self) -> &str {
        &self.server
    }

    /// Unqualified tool identifier as declared by the server
    pub fn tool(&self) -> &str {
        &self.tool
    }
}

#[async_trait]
impl Tool for McpTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                self.arg: {
                    "type": "string",
                    "description": format!("Input forwarded to the {} server", self.title)
                }
            }
        })
    }

    async fn execute(&self, input: Value, _ctx: &ToolContext) -> Result<ToolResult, eyre::Error> {
        let detail = input[self.arg]
            .as_str()
            .filter(|s| !s.is_empty())
            .map(|s| format!(" with {} '{}'", self.arg, s))
            .unwrap_or_default();

        Ok(ToolResult::success(format!(
            "'{}' would be forwarded to the {} server{}",
            self.tool, self.title, detail
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::registry::ServerRegistry;
    use tempfile::tempdir;

    #[test]
    fn test_adapter_qualified_name() {
        let registry = ServerRegistry::builtin();
        let browser = registry.get("browser").unwrap();

        let tool = McpTool::new(browser, "screenshot");
        assert_eq!(tool.name(), "browser_screenshot");
        assert_eq!(tool.server(), "browser");
        assert_eq!(tool.tool(), "screenshot");
        assert!(tool.description().contains("Browser Tools"));
    }

    #[test]
    fn test_for_server_covers_all_declared_tools() {
        let registry = ServerRegistry::builtin();
        for server in registry.iter() {
            let adapters = McpTool::for_server(server);
            assert_eq!(adapters.len(), server.tool_count());
            for (adapter, declared) in adapters.iter().zip(server.tools) {
                assert_eq!(adapter.tool(), *declared);
            }
        }
    }

    #[test]
    fn test_adapter_names_unique_across_servers() {
        let registry = ServerRegistry::builtin();
        let mut seen = std::collections::HashSet::new();
        for server in registry.iter() {
            for adapter in McpTool::for_server(server) {
                assert!(seen.insert(adapter.name().to_string()), "collision: {}", adapter.name());
            }
        }
    }

    #[test]
    fn test_adapter_schema_uses_server_arg() {
        let registry = ServerRegistry::builtin();
        let figma = registry.get("figma").unwrap();

        let tool = McpTool::new(figma, "get_code");
        let schema = tool.input_schema();
        assert!(schema["properties"]["node_id"].is_object());
    }

    #[tokio::test]
    async fn test_adapter_execute_reports_forwarding() {
        let dir = tempdir().unwrap();
        let ctx = ToolContext::new(dir.path().to_path_buf());

        let registry = ServerRegistry::builtin();
        let shopify = registry.get("shopify").unwrap();
        let tool = McpTool::new(shopify, "search_dev_docs");

        let result = tool
            .execute(serde_json::json!({"query": "checkout api"}), &ctx)
            .await
            .unwrap();

        assert!(!result.is_error);
        assert!(result.content.contains("search_dev_docs"));
        assert!(result.content.contains("Shopify Development"));
        assert!(result.content.contains("checkout api"));
    }

    #[tokio::test]
    async fn test_adapter_execute_without_input() {
        let dir = tempdir().unwrap();
        let ctx = ToolContext::new(dir.path().to_path_buf());

        let registry = ServerRegistry::builtin();
        let hf = registry.get("huggingface").unwrap();
        let tool = McpTool::new(hf, "whoami");

        let result = tool.execute(serde_json::json!({}), &ctx).await.unwrap();
        assert!(!result.is_error);
        assert!(result.content.contains("whoami"));
    }
}
