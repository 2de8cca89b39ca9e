//! Activation manager for MCP server bundles
//!
//! Toggles membership of a server in the active set. Activation
//! instantiates one adapter per declared tool and records them under the
//! server's slug, so deactivation removes exactly what that server
//! contributed. Pure in-memory state, single-threaded, no persistence.

use std::collections::BTreeMap;

use crate::error::{Result, SwitchboardError};
use crate::mcp::adapter::McpTool;
use crate::mcp::registry::ServerRegistry;

/// Manages the set of active MCP servers and their tool adapters
#[derive(Debug)]
pub struct ServerManager {
    registry: ServerRegistry,
    active: BTreeMap<String, Vec<McpTool>>,
}

impl ServerManager {
    pub fn new(registry: ServerRegistry) -> Self {
        Self {
            registry,
            active: BTreeMap::new(),
        }
    }

    /// The underlying registry
    pub fn registry(&self) -> &ServerRegistry {
        &self.registry
    }

    /// Activate a server and return the adapters it contributed
    ///
    /// Fails with `UnknownServer` for unregistered names, leaving the
    /// active set unchanged. Re-activating an active server is a no-op
    /// that returns an empty list.
    pub fn activate(&mut self, name: &str) -> Result<Vec<McpTool>> {
        let descriptor = self
            .registry
            .get(name)
            .ok_or_else(|| SwitchboardError::UnknownServer(name.to_string()))?;

        if self.active.contains_key(name) {
            return Ok(Vec::new());
        }

        let adapters = McpTool::for_server(descriptor);
        self.active.insert(name.to_string(), adapters.clone());
        log::info!("Activated MCP server '{}' ({} tools)", name, adapters.len());
        Ok(adapters)
    }

    /// Deactivate a server, returning the adapters it had contributed
    ///
    /// Returns `None` if the server was not active (including unknown
    /// names); deactivation is a no-op in that case.
    pub fn deactivate(&mut self, name: &str) -> Option<Vec<McpTool>> {
        let removed = self.active.remove(name);
        if let Some(adapters) = &removed {
            log::info!("Deactivated MCP server '{}' ({} tools)", name, adapters.len());
        }
        removed
    }

    /// Whether a server is currently active
    pub fn is_active(&self, name: &str) -> bool {
        self.active.contains_key(name)
    }

    /// Active/inactive flag for every known server, in catalog order
    pub fn status(&self) -> Vec<(&'static str, bool)> {
        self.registry
            .iter()
            .map(|s| (s.name, self.active.contains_key(s.name)))
            .collect()
    }

    /// Slugs of the active servers
    pub fn active_servers(&self) -> Vec<&str> {
        self.active.keys().map(|s| s.as_str()).collect()
    }

    /// All adapters from all active servers
    pub fn active_tools(&self) -> impl Iterator<Item = &McpTool> {
        self.active.values().flatten()
    }

    /// Total number of active tool adapters
    pub fn active_tool_count(&self) -> usize {
        self.active.values().map(Vec::len).sum()
    }
}

impl Default for ServerManager {
    fn default() -> Self {
        Self::new(ServerRegistry::builtin())
    }
}
