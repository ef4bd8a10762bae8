//! Resource shape: which columns the JSON resource exposes.

use serde::Serialize;

use crate::classify::ColumnDescriptor;

/// Decides whether a column appears in serialized output.
///
/// Implementations must be pure; the pipeline may consult a policy from
/// several invocations.
pub trait ShapePolicy: Send + Sync {
    fn exposes(&self, column: &ColumnDescriptor) -> bool;
}

/// Expose every column.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExposeAll;

impl ShapePolicy for ExposeAll {
    fn exposes(&self, _column: &ColumnDescriptor) -> bool {
        true
    }
}

/// Expose every column except internal ones such as `password`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HideInternal;

impl ShapePolicy for HideInternal {
    fn exposes(&self, column: &ColumnDescriptor) -> bool {
        !column.is_internal()
    }
}

/// Ordered column names exposed by the resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceShape {
    pub columns: Vec<String>,
}

impl ResourceShape {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }
}

/// Build the shape with the default [`ExposeAll`] policy.
pub fn build_shape(descriptors: &[ColumnDescriptor]) -> ResourceShape {
    build_shape_with(descriptors, &ExposeAll)
}

/// Build the shape with a custom policy.
pub fn build_shape_with(descriptors: &[ColumnDescriptor], policy: &dyn ShapePolicy) -> ResourceShape {
    ResourceShape {
        columns: descriptors
            .iter()
            .filter(|desc| policy.exposes(desc))
            .map(|desc| desc.name().to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use autocrud_core::Column;

    use super::*;
    use crate::classify::classify_all;

    fn user_columns() -> Vec<ColumnDescriptor> {
        let columns: Vec<Column> = ["id", "name", "email", "password", "remember_token", "created_at"]
            .into_iter()
            .map(Column::from)
            .collect();
        classify_all(&columns)
    }

    #[test]
    fn test_expose_all_keeps_order() {
        let shape = build_shape(&user_columns());
        assert_eq!(
            shape.columns,
            ["id", "name", "email", "password", "remember_token", "created_at"]
        );
    }

    #[test]
    fn test_hide_internal() {
        let shape = build_shape_with(&user_columns(), &HideInternal);
        assert_eq!(shape.columns, ["id", "name", "email", "created_at"]);
    }

    #[test]
    fn test_custom_policy() {
        struct OnlyId;

        impl ShapePolicy for OnlyId {
            fn exposes(&self, column: &ColumnDescriptor) -> bool {
                column.name() == "id"
            }
        }

        let shape = build_shape_with(&user_columns(), &OnlyId);
        assert_eq!(shape.iter().collect::<Vec<_>>(), ["id"]);
    }
}
