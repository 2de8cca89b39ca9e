//! directory_tree tool - Visual tree structure of a directory

use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;

use super::{Tool, ToolContext, ToolResult};

pub struct DirectoryTreeTool;

fn build_tree(current: &Path, prefix: &str, depth: usize, max_depth: usize, show_hidden: bool, out: &mut Vec<String>) {
    if depth > max_depth {
        return;
    }

    let mut children: Vec<_> = match std::fs::read_dir(current) {
        Ok(entries) => entries.filter_map(|e| e.ok()).collect(),
        Err(_) => {
            out.push(format!("{}└── (permission denied)", prefix));
            return;
        }
    };

    if !show_hidden {
        children.retain(|c| !c.file_name().to_string_lossy().starts_with('.'));
    }

    // Directories first, then files, each alphabetically
    children.sort_by_key(|c| {
        let is_file = c.path().is_file();
        (is_file, c.file_name().to_string_lossy().to_lowercase())
    });

    let count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        let is_last = i == count - 1;
        let connector = if is_last { "└── " } else { "├── " };
        let next_prefix = if is_last { "    " } else { "│   " };

        let name = child.file_name().to_string_lossy().to_string();
        let path = child.path();
        let suffix = if path.is_dir() { "/" } else { "" };
        out.push(format!("{}{}{}{}", prefix, connector, name, suffix));

        if path.is_dir() && depth < max_depth {
            build_tree(&path, &format!("{}{}", prefix, next_prefix), depth + 1, max_depth, show_hidden, out);
        }
    }
}

#[async_trait]
impl Tool for DirectoryTreeTool {
    fn name(&self) -> &str {
        "directory_tree"
    }

    fn description(&self) -> &str {
        "Generate a visual tree structure of directories and files."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Root path relative to the workspace (default: .)"
                },
                "max_depth": {
                    "type": "integer",
                    "description": "Maximum recursion depth (default: 3)"
                },
                "show_hidden": {
                    "type": "boolean",
                    "description": "Include dotfiles (default: false)"
                }
            }
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> Result<ToolResult, eyre::Error> {
        let path = input["path"].as_str().unwrap_or(".");
        let max_depth = input["max_depth"].as_u64().unwrap_or(3) as usize;
        let show_hidden = input["show_hidden"].as_bool().unwrap_or(false);

        let root = ctx.validate_path(Path::new(path))?;
        if !root.is_dir() {
            return Ok(ToolResult::error(format!("'{}' is not a directory", path)));
        }

        let mut lines = vec![format!("{}/", root.display())];
        build_tree(&root, "", 0, max_depth, show_hidden, &mut lines);

        Ok(ToolResult::success(lines.join("\n")))
    }
}
