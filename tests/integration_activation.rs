//! Server activation integration tests
//!
//! Exercises the registry/activation flow end to end, including the chat
//! dispatcher with a mock LLM client.

use switchboard::agent::Agent;
use switchboard::config::Config;
use switchboard::error::SwitchboardError;
use switchboard::llm::{CompletionResponse, FinishReason, MockLlmClient, ToolCall};
use switchboard::mcp::{ServerManager, ServerRegistry};
use tempfile::TempDir;

fn test_agent(responses: Vec<CompletionResponse>, workspace: &TempDir) -> Agent {
    let mock = MockLlmClient::with_responses(responses);
    Agent::with_client(&Config::default(), workspace.path().to_path_buf(), true, Box::new(mock))
}

/// Unknown server names fail and leave the active set unchanged
#[test]
fn test_unknown_server_leaves_active_set_unchanged() {
    let mut manager = ServerManager::default();
    manager.activate("browser").unwrap();

    let result = manager.activate("gitlab");
    assert!(matches!(result, Err(SwitchboardError::UnknownServer(_))));
    assert_eq!(manager.active_tool_count(), 14);
    assert_eq!(manager.active_servers(), vec!["browser"]);
}

/// Activation is idempotent
#[test]
fn test_activation_idempotent() {
    let mut manager = ServerManager::default();
    manager.activate("huggingface").unwrap();
    let count_once = manager.active_tool_count();

    manager.activate("huggingface").unwrap();
    assert_eq!(manager.active_tool_count(), count_once);
}

/// The worked example: browser + huggingface, then deactivate browser
#[test]
fn test_browser_plus_huggingface_counts() {
    let registry = ServerRegistry::builtin();
    let browser_count = registry.get("browser").unwrap().tool_count();
    let hf_count = registry.get("huggingface").unwrap().tool_count();

    let mut manager = ServerManager::new(registry);
    manager.activate("browser").unwrap();
    manager.activate("huggingface").unwrap();
    assert_eq!(manager.active_tool_count(), browser_count + hf_count);

    assert!(manager.deactivate("browser").is_some());
    assert_eq!(manager.active_tool_count(), hf_count);
    assert!(manager.active_tools().all(|t| t.server() == "huggingface"));
}

/// Total active count always equals the sum over active servers
#[test]
fn test_active_count_invariant_over_toggle_sequence() {
    let mut manager = ServerManager::default();
    let names: Vec<_> = manager.registry().names();

    for name in &names {
        manager.activate(name).unwrap();
    }
    assert!(manager.deactivate("playwright").is_some());
    assert!(manager.deactivate("shopify").is_some());
    manager.activate("playwright").unwrap();

    let expected: usize = manager
        .status()
        .iter()
        .filter(|(_, active)| *active)
        .map(|(name, _)| manager.registry().get(name).unwrap().tool_count())
        .sum();
    assert_eq!(manager.active_tool_count(), expected);
}

/// The agent advertises activated tools to the model and executes local calls
#[tokio::test]
async fn test_agent_chat_with_tools_end_to_end() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("greeting.txt"), "hello from disk").unwrap();

    let call = ToolCall::new("call_1", "read_file", serde_json::json!({"path": "greeting.txt"}));
    let responses = vec![
        CompletionResponse {
            tool_calls: vec![call],
            finish_reason: FinishReason::ToolCalls,
            ..Default::default()
        },
        CompletionResponse {
            content: "The file says: hello from disk".to_string(),
            finish_reason: FinishReason::Stop,
            ..Default::default()
        },
    ];

    let mut agent = test_agent(responses, &dir);
    let reply = agent.chat("read greeting.txt").await.unwrap();
    assert!(reply.contains("hello from disk"));
}

/// Activated MCP adapters are executable through the agent's tool loop
#[tokio::test]
async fn test_agent_executes_mcp_adapter() {
    let dir = TempDir::new().unwrap();

    let call = ToolCall::new(
        "call_1",
        "huggingface_model_search",
        serde_json::json!({"query": "image generation"}),
    );
    let responses = vec![
        CompletionResponse {
            tool_calls: vec![call],
            finish_reason: FinishReason::ToolCalls,
            ..Default::default()
        },
        CompletionResponse {
            content: "done".to_string(),
            finish_reason: FinishReason::Stop,
            ..Default::default()
        },
    ];

    let mut agent = test_agent(responses, &dir);
    agent.activate_server("huggingface").unwrap();

    let reply = agent.chat("find me a model").await.unwrap();
    assert_eq!(reply, "done");
    // user + assistant(tool_calls) + tool result + assistant
    assert_eq!(agent.history_len(), 4);
}

/// Toggling servers through the agent keeps report totals consistent
#[test]
fn test_agent_report_tracks_toggles() {
    let dir = TempDir::new().unwrap();
    let mut agent = test_agent(vec![], &dir);

    let base = agent.report();
    assert_eq!(base.total_tools, base.local_tools);
    assert_eq!(base.mcp_tools, 0);

    agent.activate_server("supabase").unwrap();
    agent.activate_server("figma").unwrap();
    let report = agent.report();
    assert_eq!(report.mcp_tools, 25 + 4);
    assert_eq!(report.total_tools, report.local_tools + report.mcp_tools);

    agent.deactivate_server("supabase");
    let report = agent.report();
    assert_eq!(report.mcp_tools, 4);
    assert_eq!(report.active_servers, vec!["figma".to_string()]);
}
