//! Tables command report data structures.

use std::path::PathBuf;

use serde::Serialize;

use super::output::{Output, Report};

/// Tables recorded in the schema snapshot.
#[derive(Debug, Serialize)]
pub struct TablesReport {
    pub schema_path: PathBuf,
    pub tables: Vec<TableInfo>,
}

#[derive(Debug, Serialize)]
pub struct TableInfo {
    pub name: String,
    /// Model name that maps to this table.
    pub model: String,
    pub columns: usize,
}

impl Report for TablesReport {
    fn render(&self, out: &mut dyn Output) {
        if self.tables.is_empty() {
            out.preformatted(&format!("No tables in {}", self.schema_path.display()));
            return;
        }

        out.section(&format!("Tables ({})", self.tables.len()));
        for table in &self.tables {
            out.list_item(&format!(
                "{} → {} ({} column{})",
                table.name,
                table.model,
                table.columns,
                if table.columns == 1 { "" } else { "s" }
            ));
        }
    }
}
