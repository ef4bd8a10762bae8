use std::path::{Path, PathBuf};

use eyre::Result;
use serde::{Deserialize, Serialize};

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// A file to be generated
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: always overwrite)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the rules used when writing this file
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult> {
        match self.rules.overwrite {
            Overwrite::Always => {
                write_file(&self.path, &self.content)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if self.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&self.path, &self.content)?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Overwrite {
    /// Always overwrite
    Always,
    /// Only create if file doesn't exist
    #[default]
    IfMissing,
}

/// Persists generated artifact content at a target path.
///
/// Targets are relative to whatever root the writer was created for.
/// Implementations own the overwrite policy and must serialize their own
/// side effects.
pub trait ArtifactWriter {
    /// Write `content` to `target`.
    fn write(&mut self, target: &Path, content: &str) -> Result<WriteResult>;
}

/// Writes artifacts below a project root on the local file system.
#[derive(Debug, Clone)]
pub struct FsWriter {
    root: PathBuf,
    overwrite: Overwrite,
}

impl FsWriter {
    pub fn new(root: impl Into<PathBuf>, overwrite: Overwrite) -> Self {
        Self {
            root: root.into(),
            overwrite,
        }
    }

    /// Resolve a target to its absolute location below the root.
    pub fn resolve(&self, target: &Path) -> PathBuf {
        self.root.join(target)
    }
}

impl ArtifactWriter for FsWriter {
    fn write(&mut self, target: &Path, content: &str) -> Result<WriteResult> {
        File::new(self.resolve(target), content)
            .with_rules(FileRules {
                overwrite: self.overwrite,
            })
            .write()
    }
}
