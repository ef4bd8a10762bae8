//! Tables operation - summarize the schema snapshot.

use std::path::Path;

use autocrud_core::{SchemaInspector, singularize, to_pascal_case};
use autocrud_manifest::SchemaSnapshot;

use crate::reports::{TableInfo, TablesReport};

/// Execute the tables operation.
pub fn tables(schema: &SchemaSnapshot, schema_path: &Path) -> TablesReport {
    let tables = schema
        .table_names()
        .map(|name| TableInfo {
            name: name.to_string(),
            model: to_pascal_case(&singularize(name)),
            columns: schema.columns(name).len(),
        })
        .collect();

    TablesReport {
        schema_path: schema_path.to_path_buf(),
        tables,
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_tables_in_file_order() {
        let schema = SchemaSnapshot::from_str(
            r#"
            [tables.blog_posts]
            columns = ["id", "title"]

            [tables.categories]
            columns = ["id", "name", "parent_id"]
            "#,
        )
        .unwrap();

        let report = tables(&schema, Path::new("schema.toml"));
        let rows: Vec<(&str, &str, usize)> = report
            .tables
            .iter()
            .map(|t| (t.name.as_str(), t.model.as_str(), t.columns))
            .collect();

        assert_eq!(
            rows,
            [("blog_posts", "BlogPost", 2), ("categories", "Category", 3)]
        );
    }
}
