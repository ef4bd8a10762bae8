//! Explain operation - show every generation decision for a model.

use autocrud_codegen::{ArtifactKind, Pipeline, Result};
use autocrud_core::SchemaInspector;
use autocrud_manifest::Config;

use super::locate_table;
use crate::reports::{ColumnInfo, ExplainReport, PlannedFile, RouteInfo};

/// Execute the explain operation.
///
/// Runs the pipeline without writing anything and reports how each column
/// was classified, which rules it received and where each file would go.
pub fn explain(
    config: &Config,
    inspector: &dyn SchemaInspector,
    model: &str,
) -> Result<ExplainReport> {
    let names = locate_table(inspector, model)?;
    let columns = inspector.columns(&names.table);

    let pipeline = Pipeline::new(config);
    let analysis = pipeline.analyze(model, &columns)?;
    let artifacts = pipeline.generate(model, &columns, true)?;

    let columns = analysis
        .columns
        .iter()
        .map(|desc| ColumnInfo {
            name: desc.name().to_string(),
            kind: desc.kind().as_str().to_string(),
            internal: desc.is_internal(),
            references: desc.references().map(str::to_string),
            create_rule: analysis.create_rules.get(desc.name()).map(|r| r.render()),
            update_rule: analysis.update_rules.get(desc.name()).map(|r| r.render()),
            exposed: analysis.shape.iter().any(|c| c == desc.name()),
        })
        .collect();

    let files = artifacts
        .iter()
        .map(|a| PlannedFile {
            kind: a.kind,
            path: a.target.display().to_string(),
            optional: a.kind == ArtifactKind::Service,
        })
        .collect();

    let routes = RouteInfo {
        collection: format!("/{}", names.route),
        member: format!("/{}/{{{}}}", names.route, names.variable),
    };

    Ok(ExplainReport {
        model: names.model.clone(),
        table: names.table.clone(),
        routes,
        columns,
        files,
    })
}
