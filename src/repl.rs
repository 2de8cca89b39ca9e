//! Interactive chat loops
//!
//! Line-oriented REPL for the chat and project-aware development modes.
//! In-chat commands toggle MCP servers and inspect state; everything else
//! is forwarded to the agent.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;

use crate::agent::Agent;
use crate::config::Config;
use crate::error::Result;
use crate::project::ProjectInfo;

/// Options for the plain chat mode
#[derive(Debug, Clone)]
pub struct ChatOptions {
    /// Include the enhanced filesystem tools
    pub enhanced: bool,
    /// Enable in-chat MCP server toggling
    pub mcp: bool,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self {
            enhanced: true,
            mcp: false,
        }
    }
}

/// Run the interactive chat mode
pub async fn run_chat(config: &Config, opts: &ChatOptions) -> Result<()> {
    let workspace = std::env::current_dir()?;
    let mut agent = Agent::new(config, workspace, opts.enhanced)?;

    let divider = "=".repeat(60);
    println!("{}", divider.cyan());
    println!("   Switchboard - AI assistant with tool integrations");
    println!("{}", divider.cyan());

    if opts.mcp {
        println!("MCP mode: 'activate <server>', 'deactivate <server>', 'status', 'servers'");
    }
    let report = agent.report();
    println!("Model: {} | Tools: {}", report.model.bold(), report.total_tools);
    println!("Type 'quit' or 'exit' to stop.");
    println!("{}", divider.cyan());

    chat_loop(&mut agent, opts.mcp, "you").await
}

/// Run the project-aware development mode
pub async fn run_dev(config: &Config, project_path: Option<PathBuf>) -> Result<()> {
    let root = match project_path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let root = root.canonicalize()?;

    let info = ProjectInfo::analyze(&root);
    let mut agent = Agent::new(config, root.clone(), true)?;
    agent.set_system_prompt(info.system_prompt());

    let divider = "=".repeat(60);
    println!("{}", divider.cyan());
    println!("   Switchboard - project-aware development mode");
    println!("{}", divider.cyan());
    println!("Project: {}", info.name.bold());
    println!("Path: {}", root.display());
    println!("Languages: {}", info.languages_summary());
    println!("Frameworks: {}", info.frameworks_summary());
    println!("Files: {} | Git: {}", info.file_count, if info.is_git_repo { "Yes" } else { "No" });
    println!("Type 'quit' or 'exit' to stop.");
    println!("{}", divider.cyan());

    let label = info.name.clone();
    chat_loop(&mut agent, true, &label).await
}

/// Shared REPL loop; returns on quit or EOF
async fn chat_loop(agent: &mut Agent, mcp: bool, label: &str) -> Result<()> {
    let stdin = io::stdin();

    loop {
        print!("\n{} ", format!("{}>", label).bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            println!();
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if matches!(input.to_lowercase().as_str(), "quit" | "exit" | "bye") {
            println!("Goodbye!");
            break;
        }

        if handle_command(agent, mcp, input) {
            continue;
        }

        match agent.chat(input).await {
            Ok(reply) => {
                println!("\n{}", "Assistant:".green().bold());
                println!("{}", reply);
            }
            Err(e) => {
                // Failures end the turn, not the session
                println!("{} {}", "Error:".red(), e);
            }
        }
    }

    Ok(())
}

/// Handle an in-chat command; returns true when the input was consumed
fn handle_command(agent: &mut Agent, mcp: bool, input: &str) -> bool {
    if mcp {
        if let Some(name) = input.strip_prefix("activate ") {
            let name = name.trim();
            match agent.activate_server(name) {
                Ok(0) => println!("{} server already active", name),
                Ok(count) => println!("{} {} server activated ({} tools)", "OK".green(), name, count),
                Err(e) => println!("{} {}", "Error:".red(), e),
            }
            return true;
        }

        if let Some(name) = input.strip_prefix("deactivate ") {
            let name = name.trim();
            if agent.deactivate_server(name) {
                println!("{} {} server deactivated", "OK".green(), name);
            } else {
                println!("{} server was not active", name);
            }
            return true;
        }

        if input.eq_ignore_ascii_case("servers") {
            print_servers(agent);
            return true;
        }
    }

    if input.eq_ignore_ascii_case("status") {
        print_status(agent);
        return true;
    }

    if input.eq_ignore_ascii_case("tools") {
        print_tools(agent);
        return true;
    }

    false
}

/// Print the server catalog with activation flags
pub fn print_servers(agent: &Agent) {
    println!("{}", "MCP servers".bold());
    for server in agent.manager().registry().iter() {
        let marker = if agent.manager().is_active(server.name) {
            "active".green()
        } else {
            "available".dimmed()
        };
        println!(
            "  [{}] {} - {} ({} tools)",
            marker,
            server.name.bold(),
            server.description,
            server.tool_count()
        );
    }
}

/// Print the agent's effective configuration
pub fn print_status(agent: &Agent) {
    let report = agent.report();
    println!("{}", "Status".bold());
    println!("  Model: {}", report.model);
    println!("  Base URL: {}", report.base_url);
    println!("  Temperature: {}", report.temperature);
    println!("  Max tokens: {}", report.max_tokens);
    println!("  Total tools: {} ({} local, {} MCP)", report.total_tools, report.local_tools, report.mcp_tools);
    if report.active_servers.is_empty() {
        println!("  Active servers: none");
    } else {
        println!("  Active servers: {}", report.active_servers.join(", "));
    }
    let usage = agent.usage();
    println!("  Tokens used: {} prompt, {} completion", usage.prompt_tokens, usage.completion_tokens);
}

/// Print the tool list by category
pub fn print_tools(agent: &Agent) {
    let (local, mcp) = agent.tool_listing();

    println!("{}", format!("Local tools ({})", local.len()).bold());
    for def in &local {
        println!("  {} - {}", def.name.bold(), def.description);
    }

    if mcp.is_empty() {
        println!("\n{}", "MCP tools: none active".bold());
        println!("  Use 'activate <server>' to add MCP capabilities");
    } else {
        println!("\n{}", format!("MCP tools ({})", mcp.len()).bold());
        for def in &mcp {
            println!("  {} - {}", def.name.bold(), def.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockLlmClient;
    use tempfile::tempdir;

    fn test_agent() -> Agent {
        let dir = tempdir().unwrap();
        Agent::with_client(
            &Config::default(),
            dir.path().to_path_buf(),
            true,
            Box::new(MockLlmClient::new()),
        )
    }

    #[test]
    fn test_chat_options_default() {
        let opts = ChatOptions::default();
        assert!(opts.enhanced);
        assert!(!opts.mcp);
    }

    #[test]
    fn test_handle_command_activate() {
        let mut agent = test_agent();
        assert!(handle_command(&mut agent, true, "activate browser"));
        assert!(agent.manager().is_active("browser"));
    }

    #[test]
    fn test_handle_command_deactivate() {
        let mut agent = test_agent();
        agent.activate_server("figma").unwrap();
        assert!(handle_command(&mut agent, true, "deactivate figma"));
        assert!(!agent.manager().is_active("figma"));
    }

    #[test]
    fn test_handle_command_mcp_disabled() {
        let mut agent = test_agent();
        // Without --mcp, 'activate' falls through to the model
        assert!(!handle_command(&mut agent, false, "activate browser"));
        assert!(!agent.manager().is_active("browser"));
    }

    #[test]
    fn test_handle_command_status_and_tools() {
        let mut agent = test_agent();
        assert!(handle_command(&mut agent, false, "status"));
        assert!(handle_command(&mut agent, false, "tools"));
        assert!(handle_command(&mut agent, true, "servers"));
    }

    #[test]
    fn test_handle_command_plain_input_falls_through() {
        let mut agent = test_agent();
        assert!(!handle_command(&mut agent, true, "what is the weather?"));
    }

    #[test]
    fn test_handle_command_unknown_server_reports_error() {
        let mut agent = test_agent();
        // Consumed (prints the error) but leaves state unchanged
        assert!(handle_command(&mut agent, true, "activate gitlab"));
        assert_eq!(agent.manager().active_tool_count(), 0);
    }
}
