//! Static catalog of MCP servers
//!
//! The six server bundles mirror the remote services this assistant can be
//! wired to. Each descriptor declares the tools the server exposes; the
//! activation manager turns those declarations into adapters.

/// Descriptor for one MCP server bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerDescriptor {
    /// Slug used in CLI and chat commands
    pub name: &'static str,
    /// Display title
    pub title: &'static str,
    /// Human description
    pub description: &'static str,
    /// Declared tool identifiers, in catalog order
    pub tools: &'static [&'static str],
    /// Name of the free-form argument its tools accept
    pub arg: &'static str,
    /// Example prompts for the demo command
    pub examples: &'static [&'static str],
}

impl ServerDescriptor {
    /// Number of tools this server contributes when active
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }
}

const BROWSER: ServerDescriptor = ServerDescriptor {
    name: "browser",
    title: "Browser Tools",
    description: "Web browser automation and testing tools",
    tools: &[
        "console_logs",
        "console_errors",
        "network_errors",
        "network_logs",
        "screenshot",
        "selected_element",
        "wipe_logs",
        "accessibility_audit",
        "performance_audit",
        "seo_audit",
        "nextjs_audit",
        "debugger_mode",
        "audit_mode",
        "best_practices_audit",
    ],
    arg: "action",
    examples: &[
        "Take a screenshot of the current webpage",
        "Run an accessibility audit on the site",
        "Check console errors and network logs",
    ],
};

const PLAYWRIGHT: ServerDescriptor = ServerDescriptor {
    name: "playwright",
    title: "Playwright Browser",
    description: "Advanced browser automation with Playwright",
    tools: &[
        "close",
        "resize",
        "console_messages",
        "handle_dialog",
        "file_upload",
        "install",
        "press_key",
        "navigate",
        "navigate_back",
        "navigate_forward",
        "network_requests",
        "pdf_save",
        "tab_list",
        "tab_new",
        "tab_select",
        "tab_close",
        "generate_playwright_test",
        "screen_capture",
        "screen_move_mouse",
        "screen_click",
        "screen_drag",
        "screen_type",
        "wait_for",
    ],
    arg: "action",
    examples: &[
        "Navigate to a website and click a button",
        "Fill out a form and submit it",
        "Generate a Playwright test script",
    ],
};

const SUPABASE: ServerDescriptor = ServerDescriptor {
    name: "supabase",
    title: "Supabase Database",
    description: "Database operations and management",
    tools: &[
        "list_organizations",
        "get_organization",
        "list_projects",
        "get_project",
        "get_cost",
        "confirm_cost",
        "create_branch",
        "list_branches",
        "delete_branch",
        "merge_branch",
        "reset_branch",
        "rebase_branch",
        "list_tables",
        "list_extensions",
        "list_migrations",
        "apply_migration",
        "execute_sql",
        "get_logs",
        "get_advisors",
        "get_project_url",
        "get_anon_key",
        "generate_typescript_types",
        "search_docs",
        "list_edge_functions",
        "deploy_edge_function",
    ],
    arg: "query",
    examples: &[
        "List my Supabase projects",
        "Execute a SQL query on my database",
        "Deploy an edge function",
    ],
};

const FIGMA: ServerDescriptor = ServerDescriptor {
    name: "figma",
    title: "Figma Design",
    description: "Design file analysis and code generation",
    tools: &["get_code", "get_variable_defs", "get_code_connect_map", "get_image"],
    arg: "node_id",
    examples: &[
        "Generate React code from a Figma design",
        "Extract design variables from Figma",
        "Export an image from a Figma node",
    ],
};

const SHOPIFY: ServerDescriptor = ServerDescriptor {
    name: "shopify",
    title: "Shopify Development",
    description: "E-commerce development tools",
    tools: &["search_dev_docs", "fetch_docs_by_path", "get_started"],
    arg: "query",
    examples: &[
        "Search Shopify documentation for API info",
        "Get started with Shopify app development",
        "Find examples for checkout customization",
    ],
};

const HUGGINGFACE: ServerDescriptor = ServerDescriptor {
    name: "huggingface",
    title: "Hugging Face AI",
    description: "AI models, datasets, and ML tools",
    tools: &[
        "whoami",
        "space_search",
        "model_search",
        "model_details",
        "paper_search",
        "dataset_search",
        "dataset_details",
        "doc_search",
        "doc_fetch",
        "flux1_schnell",
        "easyghibli",
    ],
    arg: "query",
    examples: &[
        "Search for image generation models",
        "Find datasets for machine learning",
        "Generate an image using Flux model",
    ],
};

/// Catalog order is display order
const SERVERS: &[ServerDescriptor] = &[BROWSER, PLAYWRIGHT, SUPABASE, FIGMA, SHOPIFY, HUGGINGFACE];

/// Registry of known MCP servers
#[derive(Debug, Clone)]
pub struct ServerRegistry {
    servers: &'static [ServerDescriptor],
}

impl ServerRegistry {
    /// The built-in server catalog
    pub fn builtin() -> Self {
        Self { servers: SERVERS }
    }

    /// Get a server descriptor by slug
    pub fn get(&self, name: &str) -> Option<&ServerDescriptor> {
        self.servers.iter().find(|s| s.name == name)
    }

    /// Check if a server is registered
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All server slugs in catalog order
    pub fn names(&self) -> Vec<&'static str> {
        self.servers.iter().map(|s| s.name).collect()
    }

    /// Iterate descriptors in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &ServerDescriptor> {
        self.servers.iter()
    }

    /// Number of registered servers
    pub fn len(&self) -> usize {
        self.servers.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}

impl Default for ServerRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_six_servers() {
        let registry = ServerRegistry::builtin();
        assert_eq!(registry.len(), 6);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_catalog_order() {
        let registry = ServerRegistry::builtin();
        assert_eq!(
            registry.names(),
            vec!["browser", "playwright", "supabase", "figma", "shopify", "huggingface"]
        );
    }

    #[test]
    fn test_declared_tool_counts() {
        let registry = ServerRegistry::builtin();
        assert_eq!(registry.get("browser").unwrap().tool_count(), 14);
        assert_eq!(registry.get("playwright").unwrap().tool_count(), 23);
        assert_eq!(registry.get("supabase").unwrap().tool_count(), 25);
        assert_eq!(registry.get("figma").unwrap().tool_count(), 4);
        assert_eq!(registry.get("shopify").unwrap().tool_count(), 3);
        assert_eq!(registry.get("huggingface").unwrap().tool_count(), 11);
    }

    #[test]
    fn test_get_unknown_server() {
        let registry = ServerRegistry::builtin();
        assert!(registry.get("gitlab").is_none());
        assert!(!registry.contains("gitlab"));
    }

    #[test]
    fn test_descriptors_have_examples() {
        let registry = ServerRegistry::builtin();
        for server in registry.iter() {
            assert!(!server.examples.is_empty(), "{} has no examples", server.name);
            assert!(!server.description.is_empty());
            assert!(!server.title.is_empty());
        }
    }

    #[test]
    fn test_tool_names_unique_within_server() {
        let registry = ServerRegistry::builtin();
        for server in registry.iter() {
            let mut seen = std::collections::HashSet::new();
            for tool in server.tools {
                assert!(seen.insert(tool), "duplicate tool {} in {}", tool, server.name);
            }
        }
    }
}
