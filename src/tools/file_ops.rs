//! file_ops tool - Safe copy, move, and timestamped backup operations

use async_trait::async_trait;
use chrono::Local;
use eyre::eyre;
use serde_json::Value;
use std::path::Path;

use super::{Tool, ToolContext, ToolResult};

pub struct FileOpsTool;

#[async_trait]
impl Tool for FileOpsTool {
    fn name(&self) -> &str {
        "file_ops"
    }

    fn description(&self) -> &str {
        "Perform safe file operations: copy, move, or create a timestamped backup."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "operation": {
                    "type": "string",
                    "description": "One of: copy, move, backup"
                },
                "source": {
                    "type": "string",
                    "description": "Source path relative to the workspace"
                },
                "destination": {
                    "type": "string",
                    "description": "Destination path (required for copy and move)"
                }
            },
            "required": ["operation", "source"]
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> Result<ToolResult, eyre::Error> {
        let operation = input["operation"].as_str().ok_or_else(|| eyre!("operation is required"))?;
        let source = input["source"].as_str().ok_or_else(|| eyre!("source is required"))?;

        let source_path = ctx.validate_path(Path::new(source))?;
        if !source_path.exists() {
            return Ok(ToolResult::error(format!("Source '{}' does not exist", source)));
        }
        if source_path.is_dir() {
            return Ok(ToolResult::error(format!(
                "'{}' is a directory; file_ops handles files only",
                source
            )));
        }

        match operation {
            "backup" => {
                let timestamp = Local::now().format("%Y%m%d_%H%M%S");
                let file_name = source_path
                    .file_name()
                    .ok_or_else(|| eyre!("source has no file name"))?
                    .to_string_lossy();
                let backup_name = format!("{}.backup_{}", file_name, timestamp);
                let backup_path = source_path
                    .parent()
                    .ok_or_else(|| eyre!("source has no parent directory"))?
                    .join(&backup_name);

                tokio::fs::copy(&source_path, &backup_path).await?;
                Ok(ToolResult::success(format!("Backed up {} to {}", source, backup_name)))
            }
            "copy" => {
                let destination = match input["destination"].as_str() {
                    Some(d) => d,
                    None => return Ok(ToolResult::error("Destination required for copy operation")),
                };
                let dest_path = ctx.validate_path(Path::new(destination))?;

                if let Some(parent) = dest_path.parent() {
                    tokio::fs::create_dir_all(parent).await?;
                }
                tokio::fs::copy(&source_path, &dest_path).await?;
                Ok(ToolResult::success(format!("Copied {} to {}", source, destination)))
            }
            "move" => {
                let destination = match input["destination"].as_str() {
                    Some(d) => d,
                    None => return Ok(ToolResult::error("Destination required for move operation")),
                };
                let dest_path = ctx.validate_path(Path::new(destination))?;

                if let Some(parent) = dest_path.parent() {
                    tokio::fs::create_dir_all(parent).await?;
                }
                tokio::fs::rename(&source_path, &dest_path).await?;
                Ok(ToolResult::success(format!("Moved {} to {}", source, destination)))
            }
            other => Ok(ToolResult::error(format!(
                "Unknown operation: {}. Use: backup, copy, move",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_copy() {
        let dir = tempdir().unwrap();
        let ctx = ToolContext::new(dir.path().to_path_buf());

        std::fs::write(dir.path().join("a.txt"), "payload").unwrap();

        let tool = FileOpsTool;
        let result = tool
            .execute(
                serde_json::json!({"operation": "copy", "source": "a.txt", "destination": "b.txt"}),
                &ctx,
            )
            .await
            .unwrap();

        assert!(!result.is_error);
        assert_eq!(std::fs::read_to_string(dir.path().join("b.txt")).unwrap(), "payload");
        assert!(dir.path().join("a.txt").exists());
    }

    #[tokio::test]
    async fn test_move() {
        let dir = tempdir().unwrap();
        let ctx = ToolContext::new(dir.path().to_path_buf());

        std::fs::write(dir.path().join("a.txt"), "payload").unwrap();

        let tool = FileOpsTool;
        let result = tool
            .execute(
                serde_json::json!({"operation": "move", "source": "a.txt", "destination": "moved/b.txt"}),
                &ctx,
            )
            .await
            .unwrap();

        assert!(!result.is_error);
        assert!(!dir.path().join("a.txt").exists());
        assert_eq!(
            std::fs::read_to_string(dir.path().join("moved/b.txt")).unwrap(),
            "payload"
        );
    }

    #[tokio::test]
    async fn test_backup_creates_timestamped_copy() {
        let dir = tempdir().unwrap();
        let ctx = ToolContext::new(dir.path().to_path_buf());

        std::fs::write(dir.path().join("config.env"), "KEY=1").unwrap();

        let tool = FileOpsTool;
        let result = tool
            .execute(serde_json::json!({"operation": "backup", "source": "config.env"}), &ctx)
            .await
            .unwrap();

        assert!(!result.is_error);

        let backups: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().starts_with("config.env.backup_"))
            .collect();
        assert_eq!(backups.len(), 1);
        assert_eq!(std::fs::read_to_string(backups[0].path()).unwrap(), "KEY=1");
        // Original stays in place
        assert!(dir.path().join("config.env").exists());
    }

    #[tokio::test]
    async fn test_copy_without_destination() {
        let dir = tempdir().unwrap();
        let ctx = ToolContext::new(dir.path().to_path_buf());

        std::fs::write(dir.path().join("a.txt"), "x").unwrap();

        let tool = FileOpsTool;
        let result = tool
            .execute(serde_json::json!({"operation": "copy", "source": "a.txt"}), &ctx)
            .await
            .unwrap();

        assert!(result.is_error);
        assert!(result.content.contains("Destination required"));
    }

    #[tokio::test]
    async fn test_unknown_operation() {
        let dir = tempdir().unwrap();
        let ctx = ToolContext::new(dir.path().to_path_buf());

        std::fs::write(dir.path().join("a.txt"), "x").unwrap();

        let tool = FileOpsTool;
        let result = tool
            .execute(serde_json::json!({"operation": "shred", "source": "a.txt"}), &ctx)
            .await
            .unwrap();

        assert!(result.is_error);
        assert!(result.content.contains("Unknown operation"));
    }

    #[tokio::test]
    async fn test_missing_source() {
        let dir = tempdir().unwrap();
        let ctx = ToolContext::new(dir.path().to_path_buf());

        let tool = FileOpsTool;
        let result = tool
            .execute(serde_json::json!({"operation": "backup", "source": "ghost.txt"}), &ctx)
            .await
            .unwrap();

        assert!(result.is_error);
        assert!(result.content.contains("does not exist"));
    }
}
