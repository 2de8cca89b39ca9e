//! Tool execution context - scoped to the session workspace

use std::path::{Path, PathBuf};

/// Execution context for tools
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// Workspace root - all file ops constrained here
    pub workspace: PathBuf,

    /// Whether sandbox mode is enabled (default: true)
    pub sandbox_enabled: bool,
}

impl ToolContext {
    pub fn new(workspace: PathBuf) -> Self {
        Self {
            workspace,
            sandbox_enabled: true,
        }
    }

    /// Create a context with sandbox disabled (for testing)
    pub fn new_unsandboxed(workspace: PathBuf) -> Self {
        Self {
            workspace,
            sandbox_enabled: false,
        }
    }

    /// Normalize a path relative to the workspace
    fn normalize_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.workspace.join(path)
        }
    }

    /// Validate path is within the workspace (sandbox enforcement)
    pub fn validate_path(&self, path: &Path) -> Result<PathBuf, ToolError> {
        let normalized = self.normalize_path(path);

        // New files can't be canonicalized yet, so fall back to the
        // normalized path for the prefix check
        let canonical = normalized.canonicalize().unwrap_or_else(|_| normalized.clone());

        if !self.sandbox_enabled {
            return Ok(canonical);
        }

        let workspace_canonical = self.workspace.canonicalize().map_err(|e| ToolError::IoError {
            operation: "canonicalize workspace".to_string(),
            source: e,
        })?;

        if canonical.starts_with(&workspace_canonical) {
            Ok(canonical)
        } else if normalized.starts_with(&workspace_canonical) {
            Ok(normalized)
        } else {
            Err(ToolError::SandboxViolation {
                path: path.to_path_buf(),
                workspace: self.workspace.clone(),
            })
        }
    }

    /// Get the workspace path
    pub fn workspace(&self) -> &Path {
        &self.workspace
    }
}

/// Errors that can occur during tool execution
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Path {path} escapes workspace {workspace}")]
    SandboxViolation { path: PathBuf, workspace: PathBuf },

    #[error("IO error during {operation}: {source}")]
    IoError {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}
