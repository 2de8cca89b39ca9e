//! file_info tool - Detailed metadata for a file or directory

use async_trait::async_trait;
use chrono::{DateTime, Local};
use eyre::eyre;
use serde_json::Value;
use std::path::Path;

use super::{Tool, ToolContext, ToolResult};

pub struct FileInfoTool;

/// Render a byte count in human units
pub(crate) fn human_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes < KB {
        format!("{} bytes", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else if bytes < GB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    }
}

#[async_trait]
impl Tool for FileInfoTool {
    fn name(&self) -> &str {
        "file_info"
    }

    fn description(&self) -> &str {
        "Get detailed information about a file or directory: type, size, permissions, dates."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Path relative to the workspace"
                }
            },
            "required": ["path"]
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> Result<ToolResult, eyre::Error> {
        let path = input["path"].as_str().ok_or_else(|| eyre!("path is required"))?;
        let full_path = ctx.validate_path(Path::new(path))?;

        let metadata = match tokio::fs::symlink_metadata(&full_path).await {
            Ok(m) => m,
            Err(_) => return Ok(ToolResult::error(format!("Path '{}' does not exist", path))),
        };

        let file_type = if metadata.is_file() {
            "file"
        } else if metadata.is_dir() {
            "directory"
        } else if metadata.file_type().is_symlink() {
            "symlink"
        } else {
            "unknown"
        };

        let size = if metadata.is_dir() {
            let mut count = 0;
            let mut dir = tokio::fs::read_dir(&full_path).await?;
            while dir.next_entry().await?.is_some() {
                count += 1;
            }
            format!("{} items", count)
        } else {
            human_size(metadata.len())
        };

        let modified = metadata
            .modified()
            .ok()
            .map(|t| DateTime::<Local>::from(t).format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "unknown".to_string());

        let mut lines = vec![
            format!("Path: {}", full_path.display()),
            format!("Type: {}", file_type),
            format!("Size: {}", size),
            format!("Modified: {}", modified),
        ];

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            lines.push(format!("Permissions: {:03o}", metadata.permissions().mode() & 0o777));
        }

        if metadata.file_type().is_symlink() {
            if let Ok(target) = tokio::fs::read_link(&full_path).await {
                lines.push(format!("Target: {}", target.display()));
            }
        }

        Ok(ToolResult::success(lines.join("\n")))
    }
}
