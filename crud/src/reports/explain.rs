//! Explain command report data structures.

use autocrud_codegen::ArtifactKind;
use serde::Serialize;

use super::output::{Output, Report};

/// Every generation decision for one model.
#[derive(Debug, Serialize)]
pub struct ExplainReport {
    pub model: String,
    pub table: String,
    pub routes: RouteInfo,
    /// Columns in table order.
    pub columns: Vec<ColumnInfo>,
    /// Files a generation run would produce.
    pub files: Vec<PlannedFile>,
}

/// Route paths registered for the model.
#[derive(Debug, Serialize)]
pub struct RouteInfo {
    pub collection: String,
    pub member: String,
}

/// How one column was classified and validated.
#[derive(Debug, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub kind: String,
    pub internal: bool,
    pub references: Option<String>,
    pub create_rule: Option<String>,
    pub update_rule: Option<String>,
    /// Whether the resource serializes the column.
    pub exposed: bool,
}

/// A file the generator would write.
#[derive(Debug, Serialize)]
pub struct PlannedFile {
    pub kind: ArtifactKind,
    pub path: String,
    /// Only produced when a service is requested.
    pub optional: bool,
}

impl Report for ExplainReport {
    fn render(&self, out: &mut dyn Output) {
        out.title(&format!("{} ({})", self.model, self.table));
        out.newline();

        out.section("Routes");
        out.key_value_indented("collection", &self.routes.collection);
        out.key_value_indented("member", &self.routes.member);
        out.newline();

        out.section("Columns");
        for column in &self.columns {
            out.list_item(&column_summary(column));
            if let Some(rule) = &column.create_rule {
                out.key_value_indented("  store", rule);
            }
            if let Some(rule) = &column.update_rule {
                out.key_value_indented("  update", rule);
            }
        }
        out.newline();

        out.section("Files");
        for file in &self.files {
            let suffix = if file.optional { " (with --service)" } else { "" };
            out.list_item(&format!("{:<15} {}{}", file.kind.label(), file.path, suffix));
        }
    }
}

fn column_summary(column: &ColumnInfo) -> String {
    let mut notes = vec![column.kind.clone()];
    if let Some(table) = &column.references {
        notes.push(format!("references {}", table));
    }
    if column.internal {
        notes.push("internal".to_string());
    }
    if !column.exposed {
        notes.push("hidden".to_string());
    }
    if column.create_rule.is_none() {
        notes.push("not validated".to_string());
    }
    format!("{} ({})", column.name, notes.join(", "))
}
