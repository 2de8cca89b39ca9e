//! Project analysis for the project-aware development mode
//!
//! Scans a project directory to detect languages, frameworks, and git
//! status. The scan is bounded so large trees don't stall startup.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Stop scanning after this many files
const MAX_SCAN_FILES: usize = 100;

/// Summary of a project directory
#[derive(Debug, Clone)]
pub struct ProjectInfo {
    pub root: PathBuf,
    pub name: String,
    pub is_git_repo: bool,
    pub languages: BTreeSet<&'static str>,
    pub frameworks: BTreeSet<&'static str>,
    pub file_count: usize,
}

fn language_for(extension: &str) -> Option<&'static str> {
    let lang = match extension {
        "py" => "Python",
        "js" => "JavaScript",
        "ts" => "TypeScript",
        "jsx" => "React",
        "tsx" => "React TypeScript",
        "vue" => "Vue.js",
        "java" => "Java",
        "cpp" | "cc" => "C++",
        "c" => "C",
        "cs" => "C#",
        "go" => "Go",
        "rs" => "Rust",
        "php" => "PHP",
        "rb" => "Ruby",
        "html" => "HTML",
        "css" => "CSS",
        "scss" => "SASS",
        "json" => "JSON",
        "yaml" | "yml" => "YAML",
        "md" => "Markdown",
        "sh" => "Shell Script",
        _ => return None,
    };
    Some(lang)
}

fn frameworks_for(file_name: &str) -> &'static [&'static str] {
    match file_name {
        "package.json" => &["Node.js/npm"],
        "requirements.txt" => &["Python"],
        "pipfile" => &["Python/Pipenv"],
        "poetry.lock" => &["Python/Poetry"],
        "cargo.toml" => &["Rust"],
        "go.mod" => &["Go"],
        "pom.xml" => &["Java/Maven"],
        "build.gradle" => &["Java/Gradle"],
        "composer.json" => &["PHP/Composer"],
        "gemfile" => &["Ruby/Bundler"],
        "yarn.lock" => &["Node.js/Yarn"],
        "next.config.js" => &["Next.js"],
        "vue.config.js" => &["Vue.js"],
        "angular.json" => &["Angular"],
        "svelte.config.js" => &["Svelte"],
        "tailwind.config.js" => &["Tailwind CSS"],
        "webpack.config.js" => &["Webpack"],
        "vite.config.js" => &["Vite"],
        "tsconfig.json" => &["TypeScript"],
        "dockerfile" => &["Docker"],
        "docker-compose.yml" => &["Docker Compose"],
        _ => &[],
    }
}

impl ProjectInfo {
    /// Analyze a project directory
    pub fn analyze(root: &Path) -> Self {
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| root.display().to_string());

        let mut info = Self {
            root: root.to_path_buf(),
            name,
            is_git_repo: root.join(".git").exists(),
            languages: BTreeSet::new(),
            frameworks: BTreeSet::new(),
            file_count: 0,
        };

        scan(root, &mut info);
        info
    }

    /// Comma-joined language list, or a fallback
    pub fn languages_summary(&self) -> String {
        if self.languages.is_empty() {
            "Unknown".to_string()
        } else {
            self.languages.iter().copied().collect::<Vec<_>>().join(", ")
        }
    }

    /// Comma-joined framework list, or a fallback
    pub fn frameworks_summary(&self) -> String {
        if self.frameworks.is_empty() {
            "None detected".to_string()
        } else {
            self.frameworks.iter().copied().collect::<Vec<_>>().join(", ")
        }
    }

    /// System prompt for the project-aware agent
    pub fn system_prompt(&self) -> String {
        format!(
            "You are an expert software development assistant working directly on the \
             user's local filesystem.\n\n\
             Current project context:\n\
             - Project: {}\n\
             - Path: {}\n\
             - Git repository: {}\n\
             - Languages: {}\n\
             - Frameworks: {}\n\
             - Files found: {}\n\n\
             You have direct access to the filesystem through your tools: read and \
             write files, list and search directories, and run shell commands (git, \
             builds, tests).\n\n\
             Working principles:\n\
             1. Consider the project context and existing patterns before changing code.\n\
             2. Check `git status` before major changes.\n\
             3. Explain what you are doing before executing commands.\n\
             4. Break complex tasks into smaller, verifiable steps.\n\
             5. Respect existing code style and project structure.\n\n\
             Always work within the project directory: {}",
            self.name,
            self.root.display(),
            if self.is_git_repo { "Yes" } else { "No" },
            self.languages_summary(),
            self.frameworks_summary(),
            self.file_count,
            self.root.display(),
        )
    }
}

/// Recursive bounded scan, skipping hidden entries
fn scan(dir: &Path, info: &mut ProjectInfo) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Could not scan {}: {}", dir.display(), e);
            return;
        }
    };

    for entry in entries.filter_map(|e| e.ok()) {
        if info.file_count >= MAX_SCAN_FILES {
            return;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        if file_name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        if path.is_dir() {
            scan(&path, info);
        } else {
            info.file_count += 1;

            if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                if let Some(lang) = language_for(&ext.to_lowercase()) {
                    info.languages.insert(lang);
                }
            }

            for framework in frameworks_for(&file_name.to_lowercase()) {
                info.frameworks.insert(*framework);
            }
        }
    }
}
