//! Configuration and schema snapshot parsing for autocrud.
//!
//! Two files drive a generation run:
//!
//! - `crud.toml` describes the target project layout ([`Config`])
//! - `schema.toml` records the tables and columns of the database ([`SchemaSnapshot`])

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod schema;
mod template;
mod validate;

pub use config::{
    Config, ControllerConfig, Namespaces, OutputConfig, Paths, ProjectConfig, ResourceConfig,
    SchemaConfig,
};
pub use error::{Error, Result, SourceContext};
pub use schema::{ColumnEntry, SchemaSnapshot, TableDef};
pub use template::{DEFAULT_CONFIG, EXAMPLE_SCHEMA};
