//! Test utilities for the generation pipeline.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    cell::Cell,
    collections::HashMap,
    path::{Path, PathBuf},
    process::Command,
};

use autocrud_core::{ArtifactWriter, Column, FsWriter, Overwrite, SchemaInspector, WriteResult};
use eyre::{Result, eyre};

use crate::artifact::Artifact;

/// An in-memory [`SchemaInspector`].
///
/// Counts column lookups so tests can assert that a run stopped before
/// reading any table.
#[derive(Debug, Default)]
pub struct MemorySchema {
    tables: HashMap<String, Vec<Column>>,
    column_requests: Cell<usize>,
}

impl MemorySchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table with the given columns.
    pub fn table<I, C>(mut self, name: &str, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Column>,
    {
        self.tables
            .insert(name.to_string(), columns.into_iter().map(Into::into).collect());
        self
    }

    /// How many times `columns` was called.
    pub fn column_requests(&self) -> usize {
        self.column_requests.get()
    }
}

impl SchemaInspector for MemorySchema {
    fn table_exists(&self, table: &str) -> bool {
        self.tables.contains_key(table)
    }

    fn columns(&self, table: &str) -> Vec<Column> {
        self.column_requests.set(self.column_requests.get() + 1);
        self.tables.get(table).cloned().unwrap_or_default()
    }
}

/// An [`ArtifactWriter`] that keeps every write in memory.
#[derive(Debug, Default)]
pub struct RecordingWriter {
    writes: Vec<(PathBuf, String)>,
}

impl RecordingWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> &[(PathBuf, String)] {
        &self.writes
    }

    /// Content last written to `target`, if any.
    pub fn content(&self, target: &Path) -> Option<&str> {
        self.writes
            .iter()
            .rev()
            .find(|(path, _)| path == target)
            .map(|(_, content)| content.as_str())
    }
}

impl ArtifactWriter for RecordingWriter {
    fn write(&mut self, target: &Path, content: &str) -> Result<WriteResult> {
        self.writes.push((target.to_path_buf(), content.to_string()));
        Ok(WriteResult::Written)
    }
}

/// Error from syntax checking.
#[derive(Debug)]
pub struct CompileError {
    pub message: String,
    pub output: String,
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\nOutput:\n{}", self.message, self.output)
    }
}

impl std::error::Error for CompileError {}

/// Trait for verifying generated code parses.
pub trait CompileChecker {
    /// Check every generated file below the given directory.
    fn check(&self, dir: &Path) -> Result<(), CompileError>;
}

/// PHP syntax checker using `php -l` on every `.php` file.
pub struct PhpLintChecker;

impl PhpLintChecker {
    fn lint(file: &Path) -> Result<(), CompileError> {
        let output = Command::new("php")
            .arg("-l")
            .arg(file)
            .output()
            .map_err(|e| CompileError {
                message: format!("Failed to run php -l: {}", e),
                output: String::new(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            Err(CompileError {
                message: format!("php -l failed for {}", file.display()),
                output: format!("stderr:\n{}\n\nstdout:\n{}", stderr, stdout),
            })
        }
    }
}

impl CompileChecker for PhpLintChecker {
    fn check(&self, dir: &Path) -> Result<(), CompileError> {
        let files = php_files(dir).map_err(|e| CompileError {
            message: format!("Failed to list {}", dir.display()),
            output: e.to_string(),
        })?;

        files.iter().try_for_each(|file| Self::lint(file))
    }
}

/// Whether `php` is on the PATH.
pub fn php_available() -> bool {
    Command::new("php")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn php_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(php_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "php") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Write artifacts into a fresh temporary project directory.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn write_to_temp(artifacts: &[Artifact]) -> Result<tempfile::TempDir> {
    let temp_dir = tempfile::TempDir::new()?;
    let mut writer = FsWriter::new(temp_dir.path(), Overwrite::Always);
    for artifact in artifacts {
        artifact.write(&mut writer)?;
    }
    Ok(temp_dir)
}

/// Write artifacts to a temporary directory and syntax check them.
pub fn assert_generates_valid_code<C>(artifacts: &[Artifact], checker: &C) -> Result<()>
where
    C: CompileChecker,
{
    let temp_dir = write_to_temp(artifacts)?;

    checker.check(temp_dir.path()).map_err(|e| {
        eprintln!("Generated files in {}:", temp_dir.path().display());
        for artifact in artifacts {
            eprintln!("  {}", artifact.target.display());
        }
        eyre!("Syntax check failed: {}", e)
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::ArtifactKind;

    #[test]
    fn test_memory_schema_counts_column_requests() {
        let schema = MemorySchema::new().table("posts", ["id", "title"]);

        assert!(schema.table_exists("posts"));
        assert!(!schema.table_exists("users"));
        assert_eq!(schema.column_requests(), 0);

        assert_eq!(schema.columns("posts").len(), 2);
        assert!(schema.columns("users").is_empty());
        assert_eq!(schema.column_requests(), 2);
    }

    #[test]
    fn test_recording_writer() {
        let mut writer = RecordingWriter::new();
        let artifact = Artifact::new(ArtifactKind::Routes, "routes/api/posts.php", "<?php\n");

        let result = artifact.write(&mut writer).unwrap();
        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            writer.content(Path::new("routes/api/posts.php")),
            Some("<?php\n")
        );
    }

    #[test]
    fn test_write_to_temp() {
        let artifacts = vec![Artifact::new(
            ArtifactKind::Routes,
            "routes/api/posts.php",
            "<?php\n",
        )];

        let dir = write_to_temp(&artifacts).unwrap();
        let files = php_files(dir.path()).unwrap();
        assert_eq!(files, [dir.path().join("routes/api/posts.php")]);
    }
}
