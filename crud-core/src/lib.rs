//! Core utilities and types for the autocrud scaffolding generator.
//!
//! This crate provides the collaborator interfaces the generation pipeline
//! talks to (schema introspection and artifact persistence) together with
//! file-writing and naming helpers shared across the workspace.

mod file;
mod inspect;
mod utils;

// File operations
pub use file::{ArtifactWriter, File, FileRules, FsWriter, Overwrite, WriteResult};
// Schema introspection
pub use inspect::{Column, SchemaInspector};
// String utilities
pub use utils::{pluralize, singularize, to_camel_case, to_pascal_case, to_snake_case};
