//! find_files tool - Recursive glob search with type and size filters

use async_trait::async_trait;
use eyre::eyre;
use serde_json::Value;
use std::path::Path;

use super::file_info::human_size;
use super::{Tool, ToolContext, ToolResult};

pub struct FindFilesTool;

/// Max matches included in the output
const MAX_RESULTS: usize = 50;

/// Parse a size string like "10MB", "500KB", "1GB" into bytes
pub(crate) fn parse_size(raw: &str) -> Result<u64, eyre::Error> {
    let upper = raw.trim().to_uppercase();
    let (number, multiplier) = if let Some(n) = upper.strip_suffix("GB") {
        (n, 1024u64 * 1024 * 1024)
    } else if let Some(n) = upper.strip_suffix("MB") {
        (n, 1024 * 1024)
    } else if let Some(n) = upper.strip_suffix("KB") {
        (n, 1024)
    } else if let Some(n) = upper.strip_suffix("B") {
        (n, 1)
    } else {
        (upper.as_str(), 1)
    };

    let value: f64 = number.trim().parse().map_err(|_| eyre!("invalid size: '{}'", raw))?;
    Ok((value * multiplier as f64) as u64)
}

#[async_trait]
impl Tool for FindFilesTool {
    fn name(&self) -> &str {
        "find_files"
    }

    fn description(&self) -> &str {
        "Search for files by glob pattern with optional type and size filters."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "pattern": {
                    "type": "string",
                    "description": "Glob pattern, e.g. '*.rs'"
                },
                "directory": {
                    "type": "string",
                    "description": "Directory to search, relative to the workspace (default: .)"
                },
                "file_type": {
                    "type": "string",
                    "description": "Filter: 'files', 'dirs', or 'all' (default: all)"
                },
                "min_size": {
                    "type": "string",
                    "description": "Minimum file size, e.g. '1KB'"
                },
                "max_size": {
                    "type": "string",
                    "description": "Maximum file size, e.g. '10MB'"
                }
            },
            "required": ["pattern"]
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> Result<ToolResult, eyre::Error> {
        let pattern = input["pattern"].as_str().ok_or_else(|| eyre!("pattern is required"))?;
        let directory = input["directory"].as_str().unwrap_or(".");
        let file_type = input["file_type"].as_str().unwrap_or("all");

        let min_bytes = match input["min_size"].as_str() {
            Some(raw) => parse_size(raw)?,
            None => 0,
        };
        let max_bytes = match input["max_size"].as_str() {
            Some(raw) => parse_size(raw)?,
            None => u64::MAX,
        };

        let root = ctx.validate_path(Path::new(directory))?;
        if !root.is_dir() {
            return Ok(ToolResult::error(format!("'{}' is not a directory", directory)));
        }

        let glob_pattern = format!("{}/**/{}", root.display(), pattern);
        let paths = glob::glob(&glob_pattern).map_err(|e| eyre!("bad pattern '{}': {}", pattern, e))?;

        let mut matches = Vec::new();
        for entry in paths.filter_map(|p| p.ok()) {
            let is_file = entry.is_file();
            match file_type {
                "files" if !is_file => continue,
                "dirs" if is_file => continue,
                _ => {}
            }

            let rel = entry.strip_prefix(&root).unwrap_or(&entry);
            if is_file {
                let size = match entry.metadata() {
                    Ok(m) => m.len(),
                    Err(_) => continue,
                };
                if size < min_bytes || size > max_bytes {
                    continue;
                }
                matches.push(format!("{} ({})", rel.display(), human_size(size)));
            } else {
                matches.push(format!("{}/", rel.display()));
            }
        }

        if matches.is_empty() {
            return Ok(ToolResult::success(format!(
                "No files found matching '{}' in '{}'",
                pattern, directory
            )));
        }

        let total = matches.len();
        let mut output = format!("Found {} matches for '{}':\n", total, pattern);
        output.push_str(&matches[..total.min(MAX_RESULTS)].join("\n"));
        if total > MAX_RESULTS {
            output.push_str(&format!("\n... and {} more matches", total - MAX_RESULTS));
        }

        Ok(ToolResult::success(output))
    }
}
