//! Schema introspection interface.

use serde::{Deserialize, Serialize};

/// A raw column as reported by schema introspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Column {
    /// Column name, exactly as stored in the database
    pub name: String,
    /// Database type reported for the column, if the inspector knows it
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
}

impl Column {
    /// Create a column with no reported type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: None,
        }
    }

    /// Create a column with a reported database type.
    pub fn typed(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: Some(data_type.into()),
        }
    }
}

impl From<&str> for Column {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Column {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// Read-only access to the tables of an existing database schema.
///
/// The generation pipeline only asks two questions: whether a table exists
/// and which columns it has, in declaration order.
pub trait SchemaInspector {
    /// Check whether a table with the given name exists.
    fn table_exists(&self, table: &str) -> bool;

    /// List the columns of a table in declaration order.
    ///
    /// Returns an empty list for unknown tables.
    fn columns(&self, table: &str) -> Vec<Column>;
}
