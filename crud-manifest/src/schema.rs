//! Table snapshot read from `schema.toml`.
//!
//! The snapshot is the file-backed [`SchemaInspector`] used by the `crud`
//! binary. It records, per table, the columns in declaration order and
//! optionally their database types:
//!
//! ```toml
//! [tables.posts]
//! columns = ["id", "title", { name = "views", type = "integer" }]
//! ```

use std::{collections::HashSet, path::Path, str::FromStr};

use autocrud_core::{Column, SchemaInspector};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    Error, Result,
    error::SourceContext,
    validate::{find_key_span, find_string_span},
};

/// Root of schema.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaSnapshot {
    /// Tables keyed by name, in file order
    #[serde(default)]
    pub tables: IndexMap<String, TableDef>,
}

/// A single table of the snapshot
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableDef {
    #[serde(default)]
    pub columns: Vec<ColumnEntry>,
}

/// A column given either as a bare name or as `{ name, type }`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ColumnEntry {
    Name(String),
    Typed(Column),
}

impl ColumnEntry {
    pub fn name(&self) -> &str {
        match self {
            ColumnEntry::Name(name) => name,
            ColumnEntry::Typed(column) => &column.name,
        }
    }

    pub fn to_column(&self) -> Column {
        match self {
            ColumnEntry::Name(name) => Column::new(name.as_str()),
            ColumnEntry::Typed(column) => column.clone(),
        }
    }
}

impl FromStr for SchemaSnapshot {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "schema.toml")
    }
}

impl SchemaSnapshot {
    /// Parse schema.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let snapshot: SchemaSnapshot = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        snapshot.validate(&ctx)?;
        Ok(snapshot)
    }

    /// Parse a schema.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Table names in file order.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        for (table, def) in &self.tables {
            let mut seen = HashSet::new();
            for entry in &def.columns {
                let name = entry.name();
                if name.is_empty() {
                    return Err(ctx.validation_error(
                        format!("table '{}' has a column with an empty name", table),
                        find_key_span(
                            ctx.src(),
                            Some(format!("tables.{}", table).as_str()),
                            "columns",
                        ),
                    ));
                }
                if !seen.insert(name) {
                    let span = find_string_span(ctx.src(), name);
                    return Err(ctx.duplicate_column_error(table.as_str(), name, span));
                }
            }
        }
        Ok(())
    }
}

impl SchemaInspector for SchemaSnapshot {
    fn table_exists(&self, table: &str) -> bool {
        self.tables.contains_key(table)
    }

    fn columns(&self, table: &str) -> Vec<Column> {
        self.tables
            .get(table)
            .map(|def| def.columns.iter().map(ColumnEntry::to_column).collect())
            .unwrap_or_default()
    }
}
