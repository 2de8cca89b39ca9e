use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

mod cli;

use cli::Cli;
use cli::commands::Commands;
use switchboard::config::{self, Config};
use switchboard::mcp::ServerRegistry;
use switchboard::repl::{self, ChatOptions};
use switchboard::tools::ToolExecutor;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("switchboard")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("switchboard.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None => repl::run_chat(config, &ChatOptions::default())
            .await
            .context("Chat session failed"),
        Some(Commands::Servers) => handle_servers_command(),
        Some(Commands::Info { name }) => handle_info_command(name),
        Some(Commands::Demo) => handle_demo_command(),
        Some(Commands::Tools) => handle_tools_command(),
        Some(Commands::Config) => handle_config_command(config, cli.config.as_deref()),
        Some(Commands::Chat {
            no_enhanced,
            mcp,
            temperature,
            max_tokens,
        }) => {
            let config = with_overrides(config, *temperature, *max_tokens);
            let opts = ChatOptions {
                enhanced: !no_enhanced,
                mcp: *mcp,
            };
            repl::run_chat(&config, &opts).await.context("Chat session failed")
        }
        Some(Commands::Dev {
            project_path,
            temperature,
            max_tokens,
        }) => {
            let config = with_overrides(config, *temperature, *max_tokens);
            repl::run_dev(&config, project_path.clone())
                .await
                .context("Dev session failed")
        }
    }
}

/// Apply CLI flag overrides onto the loaded configuration
fn with_overrides(config: &Config, temperature: Option<f32>, max_tokens: Option<u32>) -> Config {
    let mut config = config.clone();
    if let Some(t) = temperature {
        config.temperature = t;
    }
    if let Some(m) = max_tokens {
        config.max_tokens = m;
    }
    config
}

fn handle_servers_command() -> Result<()> {
    info!("Listing MCP servers");
    let registry = ServerRegistry::builtin();

    println!("{}", "Available MCP servers".bold());
    println!("{}", "=".repeat(50));
    for server in registry.iter() {
        println!("\n{} ({})", server.title.bold(), server.name);
        println!("  {}", server.description);
        println!("  Tools: {}", server.tool_count());
    }
    Ok(())
}

fn handle_info_command(name: &str) -> Result<()> {
    info!("Showing server info: {}", name);
    let registry = ServerRegistry::builtin();

    let Some(server) = registry.get(name) else {
        eyre::bail!("Server '{}' not found. Known servers: {}", name, registry.names().join(", "));
    };

    println!("{} ({})", server.title.bold(), server.name);
    println!("Description: {}", server.description);
    println!("Tools ({}):", server.tool_count());
    for tool in server.tools {
        println!("  - {}", tool);
    }
    Ok(())
}

fn handle_demo_command() -> Result<()> {
    info!("Running MCP demo");
    let registry = ServerRegistry::builtin();

    println!("{}", "MCP server capabilities".bold());
    println!("{}", "=".repeat(60));
    for server in registry.iter() {
        println!("\n{}", server.title.bold());
        println!("  {}", server.description);
        println!("  Tools: {}", server.tool_count());
        println!("  Examples:");
        for example in server.examples.iter().take(2) {
            println!("    - {}", example);
        }
    }

    println!("\n{}", "To use a server, start a chat with --mcp and run:".bold());
    println!("  activate <server>");
    Ok(())
}

fn handle_tools_command() -> Result<()> {
    info!("Listing tools");
    let executor = ToolExecutor::enhanced();

    println!("{}", format!("Local tools ({})", executor.len()).bold());
    println!("{}", "=".repeat(50));
    for def in executor.definitions() {
        println!("  {} - {}", def.name.bold(), def.description);
    }

    println!("\nMCP tools become available after activating a server in chat (--mcp).");
    Ok(())
}

fn handle_config_command(config: &Config, overlay: Option<&std::path::Path>) -> Result<()> {
    info!("Showing configuration");

    println!("{}", "Current configuration".bold());
    println!("{}", "=".repeat(40));
    println!("{:<15}: {}", "API Key", config.masked_key());
    println!("{:<15}: {}", "Model", config.model);
    println!("{:<15}: {}", "Base URL", config.base_url);
    println!("{:<15}: {}", "Temperature", config.temperature);
    println!("{:<15}: {}", "Max Tokens", config.max_tokens);
    println!("{:<15}: {}", "Verbose", config.verbose);

    match overlay {
        Some(path) if path.exists() => println!("{:<15}: {}", "Overlay file", path.display()),
        Some(path) => println!("{:<15}: {} (not found)", "Overlay file", path.display()),
        None => println!("{:<15}: (environment only)", "Overlay file"),
    }

    println!("\nEnvironment variables: {}, {}, {}, {}, {}, {}",
        config::ENV_API_KEY,
        config::ENV_MODEL,
        config::ENV_BASE_URL,
        config::ENV_TEMPERATURE,
        config::ENV_MAX_TOKENS,
        config::ENV_VERBOSE,
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if cli.is_verbose() {
        config.verbose = true;
    }

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await?;

    Ok(())
}
