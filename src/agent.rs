//! Chat dispatcher
//!
//! The agent forwards user utterances plus the current tool list to the
//! model endpoint and executes any tool calls the model requests. Which
//! tools are advertised depends on the activated MCP server bundles; all
//! tool-selection logic lives server-side.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::Serialize;

use crate::config::Config;
use crate::error::{Result, SwitchboardError};
use crate::llm::{CompletionRequest, LlmClient, Message, OpenAiClient, ToolDefinition, Usage};
use crate::mcp::ServerManager;
use crate::tools::{Tool, ToolContext, ToolExecutor};

/// Upper bound on tool-execution rounds per chat turn
const MAX_TOOL_ROUNDS: usize = 10;

/// The chat agent: config snapshot, LLM client, tools, and history
pub struct Agent {
    model: String,
    base_url: String,
    temperature: f32,
    max_tokens: u32,
    verbose: bool,
    client: Box<dyn LlmClient>,
    executor: ToolExecutor,
    manager: ServerManager,
    ctx: ToolContext,
    history: Vec<Message>,
    system_override: Option<String>,
    enhanced: bool,
}

/// Snapshot of the agent's effective configuration
#[derive(Debug, Clone, Serialize)]
pub struct AgentReport {
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub verbose: bool,
    pub api_key_set: bool,
    pub total_tools: usize,
    pub local_tools: usize,
    pub mcp_tools: usize,
    pub active_servers: Vec<String>,
    pub available_servers: Vec<String>,
}

impl Agent {
    /// Create an agent talking to the configured endpoint
    ///
    /// Fails when no API key is configured.
    pub fn new(config: &Config, workspace: PathBuf, enhanced: bool) -> Result<Self> {
        let client = OpenAiClient::from_config(config)?;
        Ok(Self::with_client(config, workspace, enhanced, Box::new(client)))
    }

    /// Create an agent with an injected client (used by tests)
    pub fn with_client(config: &Config, workspace: PathBuf, enhanced: bool, client: Box<dyn LlmClient>) -> Self {
        let executor = if enhanced {
            ToolExecutor::enhanced()
        } else {
            ToolExecutor::basic()
        };

        Self {
            model: config.model.clone(),
            base_url: config.base_url.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            verbose: config.verbose,
            client,
            executor,
            manager: ServerManager::default(),
            ctx: ToolContext::new(workspace),
            history: Vec::new(),
            system_override: None,
            enhanced,
        }
    }

    /// Replace the assembled system prompt (project-aware mode)
    pub fn set_system_prompt(&mut self, prompt: impl Into<String>) {
        self.system_override = Some(prompt.into());
    }

    /// The system prompt for the next request
    fn system_prompt(&self) -> String {
        if let Some(prompt) = &self.system_override {
            return prompt.clone();
        }

        let mut capabilities = vec![
            "- File and shell operations: read, write, and list files; execute shell commands".to_string(),
        ];
        if self.enhanced {
            capabilities.push(
                "- Enhanced filesystem: metadata reports, safe copy/move/backup, directory trees, glob search"
                    .to_string(),
            );
        }
        let active: Vec<_> = self
            .manager
            .active_servers()
            .iter()
            .filter_map(|name| self.manager.registry().get(name))
            .map(|s| s.title)
            .collect();
        if !active.is_empty() {
            capabilities.push(format!("- MCP servers: {} for specialized operations", active.join(", ")));
        }

        format!(
            "You are a helpful AI assistant with access to the following capabilities:\n{}\n\n\
             Use the most appropriate tool for each task. Explain what you are doing \
             before performing operations, and ask for confirmation before destructive \
             changes.",
            capabilities.join("\n")
        )
    }

    /// Send one utterance and resolve any tool calls
    pub async fn chat(&mut self, input: &str) -> Result<String> {
        self.history.push(Message::user(input));
        let system = self.system_prompt();

        for _ in 0..MAX_TOOL_ROUNDS {
            let request = CompletionRequest {
                system: system.clone(),
                messages: self.history.clone(),
                tools: self.executor.definitions(),
                temperature: Some(self.temperature),
                max_tokens: Some(self.max_tokens),
                model: None,
            };

            let response = self.client.complete(request).await?;

            if response.finish_reason.needs_tools() && !response.tool_calls.is_empty() {
                if self.verbose {
                    for call in &response.tool_calls {
                        log::info!("Tool call: {} {}", call.name, call.arguments);
                    }
                }

                self.history
                    .push(Message::assistant_with_calls(response.content.clone(), response.tool_calls.clone()));

                let results = self.executor.execute_all(&response.tool_calls, &self.ctx).await;
                for (id, result) in results {
                    let content = if result.is_error {
                        format!("ERROR: {}", result.content)
                    } else {
                        result.content
                    };
                    self.history.push(Message::tool(id, content));
                }
            } else {
                self.history.push(Message::assistant(response.content.clone()));
                return Ok(response.content);
            }
        }

        Err(SwitchboardError::Llm(format!(
            "tool loop exceeded {} rounds",
            MAX_TOOL_ROUNDS
        )))
    }

    /// Activate an MCP server, returning how many tools it added
    ///
    /// Returns 0 when the server was already active.
    pub fn activate_server(&mut self, name: &str) -> Result<usize> {
        let adapters = self.manager.activate(name)?;
        let count = adapters.len();
        for adapter in adapters {
            self.executor.add_tool(Box::new(adapter));
        }
        Ok(count)
    }

    /// Deactivate an MCP server, removing exactly the tools it contributed
    pub fn deactivate_server(&mut self, name: &str) -> bool {
        match self.manager.deactivate(name) {
            Some(adapters) => {
                for adapter in &adapters {
                    self.executor.remove_tool(adapter.name());
                }
                true
            }
            None => false,
        }
    }

    /// The activation manager
    pub fn manager(&self) -> &ServerManager {
        &self.manager
    }

    /// Tool definitions split into (local, mcp) categories
    pub fn tool_listing(&self) -> (Vec<ToolDefinition>, Vec<ToolDefinition>) {
        let mcp_names: HashSet<String> = self.manager.active_tools().map(|t| t.name().to_string()).collect();

        self.executor
            .definitions()
            .into_iter()
            .partition(|d| !mcp_names.contains(&d.name))
    }

    /// Effective configuration snapshot
    pub fn report(&self) -> AgentReport {
        let total_tools = self.executor.len();
        let mcp_tools = self.manager.active_tool_count();

        AgentReport {
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            verbose: self.verbose,
            api_key_set: self.client.is_ready(),
            total_tools,
            local_tools: total_tools - mcp_tools,
            mcp_tools,
            active_servers: self.manager.active_servers().iter().map(|s| s.to_string()).collect(),
            available_servers: self.manager.registry().names().iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Cumulative token usage for this session
    pub fn usage(&self) -> Usage {
        self.client.total_usage()
    }

    /// Number of messages in the conversation
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Drop the conversation history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
