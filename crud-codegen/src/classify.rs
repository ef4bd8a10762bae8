//! Column classifier: raw column metadata to semantic column descriptors.
//!
//! Classification walks a fixed, ordered list of rules and the first match
//! wins. The order matters where rules overlap: `created_at` is a Timestamp
//! whatever type the database reports for it, and `user_id` is a ForeignKey
//! even when reported as `bigint`.

use autocrud_core::Column;
use serde::Serialize;

use crate::naming::table_name;

/// Semantic kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnKind {
    Identifier,
    ForeignKey,
    Timestamp,
    Boolean,
    Numeric,
    Text,
    Unknown,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Identifier => "identifier",
            ColumnKind::ForeignKey => "foreign key",
            ColumnKind::Timestamp => "timestamp",
            ColumnKind::Boolean => "boolean",
            ColumnKind::Numeric => "numeric",
            ColumnKind::Text => "text",
            ColumnKind::Unknown => "unknown",
        }
    }

    /// Whether the database fills this column, so clients never send it.
    pub fn is_managed(&self) -> bool {
        matches!(self, ColumnKind::Identifier | ColumnKind::Timestamp)
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified column. Immutable once built by [`classify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDescriptor {
    name: String,
    kind: ColumnKind,
    internal: bool,
    references: Option<String>,
    max_length: Option<u32>,
}

impl ColumnDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    /// Whether the column holds data that should not leave the server.
    pub fn is_internal(&self) -> bool {
        self.internal
    }

    /// Table referenced by a foreign key column.
    pub fn references(&self) -> Option<&str> {
        self.references.as_deref()
    }

    /// Longest value a text column accepts; `None` for unbounded text.
    pub fn max_length(&self) -> Option<u32> {
        self.max_length
    }
}

type Matcher = fn(&str, Option<&str>) -> bool;

/// Classification rules in priority order.
const RULES: &[(ColumnKind, Matcher)] = &[
    (ColumnKind::Identifier, is_identifier),
    (ColumnKind::ForeignKey, is_foreign_key),
    (ColumnKind::Timestamp, is_timestamp),
    (ColumnKind::Boolean, is_boolean),
    (ColumnKind::Numeric, is_numeric),
    (ColumnKind::Text, is_text),
];

const TIMESTAMP_COLUMNS: &[&str] = &["created_at", "updated_at", "deleted_at", "email_verified_at"];

const INTERNAL_COLUMNS: &[&str] = &["password", "remember_token"];

const BOOLEAN_TYPES: &[&str] = &["bool", "boolean"];

const NUMERIC_TYPES: &[&str] = &[
    "int",
    "integer",
    "tinyint",
    "smallint",
    "mediumint",
    "bigint",
    "int2",
    "int4",
    "int8",
    "serial",
    "bigserial",
    "decimal",
    "numeric",
    "float",
    "float4",
    "float8",
    "double",
    "double precision",
    "real",
];

/// Length of a string column declared without one.
const DEFAULT_STRING_LENGTH: u32 = 255;

const UNBOUNDED_TEXT_TYPES: &[&str] = &["text", "mediumtext", "longtext", "citext"];

const TEXT_TYPES: &[&str] = &[
    "char",
    "character",
    "character varying",
    "varchar",
    "string",
    "text",
    "tinytext",
    "mediumtext",
    "longtext",
    "citext",
];

/// Classify a single column.
pub fn classify(column: &Column) -> ColumnDescriptor {
    let name = column.name.as_str();
    let data_type = column.data_type.as_deref().map(normalize_type);

    let kind = RULES
        .iter()
        .find(|(_, matches)| matches(name, data_type.as_deref()))
        .map(|(kind, _)| *kind)
        .unwrap_or(ColumnKind::Unknown);

    let references = match kind {
        ColumnKind::ForeignKey => name.strip_suffix("_id").map(table_name),
        _ => None,
    };

    let max_length = match kind {
        ColumnKind::Text => text_limit(column.data_type.as_deref()),
        _ => None,
    };

    ColumnDescriptor {
        name: name.to_string(),
        kind,
        internal: INTERNAL_COLUMNS.contains(&name),
        references,
        max_length,
    }
}

/// Classify every column, keeping input order.
pub fn classify_all(columns: &[Column]) -> Vec<ColumnDescriptor> {
    columns.iter().map(classify).collect()
}

/// Lowercase a reported type and drop length/precision arguments and
/// modifiers, keeping `tinyint(1)` intact since it means boolean in MySQL.
fn normalize_type(data_type: &str) -> String {
    let lowered = data_type.trim().to_ascii_lowercase();
    if lowered == "tinyint(1)" {
        return "boolean".to_string();
    }

    let base = lowered.split('(').next().unwrap_or_default();
    base.trim_end_matches(" unsigned").trim().to_string()
}

/// Declared length of a string type (`varchar(100)`), the default length
/// for plain string types, or `None` for the unbounded text family.
fn text_limit(data_type: Option<&str>) -> Option<u32> {
    let Some(raw) = data_type else {
        return Some(DEFAULT_STRING_LENGTH);
    };
    if UNBOUNDED_TEXT_TYPES.contains(&normalize_type(raw).as_str()) {
        return None;
    }

    let declared = raw
        .split_once('(')
        .and_then(|(_, rest)| rest.split(')').next())
        .and_then(|len| len.trim().parse().ok());
    Some(declared.unwrap_or(DEFAULT_STRING_LENGTH))
}

fn is_identifier(name: &str, _: Option<&str>) -> bool {
    name == "id"
}

fn is_foreign_key(name: &str, _: Option<&str>) -> bool {
    name.strip_suffix("_id")
        .is_some_and(|prefix| !prefix.is_empty())
}

fn is_timestamp(name: &str, _: Option<&str>) -> bool {
    TIMESTAMP_COLUMNS.contains(&name)
}

fn is_boolean(name: &str, data_type: Option<&str>) -> bool {
    data_type.is_some_and(|ty| BOOLEAN_TYPES.contains(&ty))
        || name.starts_with("is_")
        || name.starts_with("has_")
}

fn is_numeric(_: &str, data_type: Option<&str>) -> bool {
    data_type.is_some_and(|ty| NUMERIC_TYPES.contains(&ty))
}

fn is_text(_: &str, data_type: Option<&str>) -> bool {
    data_type.is_none_or(|ty| TEXT_TYPES.contains(&ty))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(column: Column) -> ColumnKind {
        classify(&column).kind()
    }

    #[test]
    fn test_name_based_rules() {
        assert_eq!(kind_of(Column::new("id")), ColumnKind::Identifier);
        assert_eq!(kind_of(Column::new("user_id")), ColumnKind::ForeignKey);
        assert_eq!(kind_of(Column::new("created_at")), ColumnKind::Timestamp);
        assert_eq!(kind_of(Column::new("updated_at")), ColumnKind::Timestamp);
        assert_eq!(kind_of(Column::new("is_active")), ColumnKind::Boolean);
        assert_eq!(kind_of(Column::new("title")), ColumnKind::Text);
    }

    #[test]
    fn test_type_based_rules() {
        assert_eq!(kind_of(Column::typed("views", "integer")), ColumnKind::Numeric);
        assert_eq!(kind_of(Column::typed("price", "DECIMAL(8,2)")), ColumnKind::Numeric);
        assert_eq!(kind_of(Column::typed("stock", "int unsigned")), ColumnKind::Numeric);
        assert_eq!(kind_of(Column::typed("published", "boolean")), ColumnKind::Boolean);
        assert_eq!(kind_of(Column::typed("featured", "tinyint(1)")), ColumnKind::Boolean);
        assert_eq!(kind_of(Column::typed("title", "varchar(255)")), ColumnKind::Text);
        assert_eq!(kind_of(Column::typed("payload", "jsonb")), ColumnKind::Unknown);
    }

    #[test]
    fn test_priority_order() {
        // Name rules win over reported types.
        assert_eq!(kind_of(Column::typed("id", "varchar")), ColumnKind::Identifier);
        assert_eq!(kind_of(Column::typed("user_id", "bigint")), ColumnKind::ForeignKey);
        assert_eq!(kind_of(Column::typed("created_at", "integer")), ColumnKind::Timestamp);
        assert_eq!(kind_of(Column::typed("is_visible", "integer")), ColumnKind::Boolean);
        assert_eq!(kind_of(Column::typed("has_replies", "varchar")), ColumnKind::Boolean);
    }

    #[test]
    fn test_text_length() {
        assert_eq!(classify(&Column::new("title")).max_length(), Some(255));
        assert_eq!(classify(&Column::typed("title", "varchar")).max_length(), Some(255));
        assert_eq!(classify(&Column::typed("code", "VARCHAR(100)")).max_length(), Some(100));
        assert_eq!(classify(&Column::typed("body", "text")).max_length(), None);
        assert_eq!(classify(&Column::typed("body", "LONGTEXT")).max_length(), None);
        assert_eq!(classify(&Column::typed("views", "integer")).max_length(), None);
    }

    #[test]
    fn test_bare_suffix_is_not_foreign_key() {
        assert_eq!(kind_of(Column::new("_id")), ColumnKind::Text);
    }

    #[test]
    fn test_foreign_key_references() {
        let desc = classify(&Column::new("user_id"));
        assert_eq!(desc.references(), Some("users"));

        let desc = classify(&Column::new("blog_category_id"));
        assert_eq!(desc.references(), Some("blog_categories"));

        let desc = classify(&Column::new("title"));
        assert_eq!(desc.references(), None);
    }

    #[test]
    fn test_internal_columns() {
        assert!(classify(&Column::new("password")).is_internal());
        assert!(classify(&Column::new("remember_token")).is_internal());
        assert!(!classify(&Column::new("email")).is_internal());
    }

    #[test]
    fn test_classify_all_keeps_order() {
        let columns: Vec<Column> = ["title", "id", "user_id"].into_iter().map(Column::from).collect();
        let names: Vec<String> = classify_all(&columns)
            .iter()
            .map(|d| d.name().to_string())
            .collect();
        assert_eq!(names, ["title", "id", "user_id"]);
    }

    #[test]
    fn test_managed_kinds() {
        assert!(ColumnKind::Identifier.is_managed());
        assert!(ColumnKind::Timestamp.is_managed());
        assert!(!ColumnKind::ForeignKey.is_managed());
        assert!(!ColumnKind::Text.is_managed());
    }
}
