//! Generation pipeline for one model.
//!
//! The pipeline only sequences the generators: names, classification, rule
//! sets and shape are computed once and fed to each artifact template. Output
//! order is fixed: store request, update request, resource, service (when
//! requested), controller, routes.

use std::collections::HashSet;

use autocrud_core::{Column, SchemaInspector};
use autocrud_manifest::Config;
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    Error, Result,
    artifact::{Artifact, ControllerMode},
    classify::{ColumnDescriptor, classify_all},
    files::{
        ArtifactTemplate, ControllerFile, FormRequestFile, ResourceFile, RoutesFile, ServiceFile,
    },
    naming::{NameSet, derive_names},
    rules::{RuleContext, RuleSet, build_rules},
    shape::{ExposeAll, HideInternal, ResourceShape, ShapePolicy, build_shape_with},
};

/// Every generation decision for a model, before any file is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub names: NameSet,
    pub columns: Vec<ColumnDescriptor>,
    pub create_rules: RuleSet,
    pub update_rules: RuleSet,
    pub shape: ResourceShape,
}

/// Orchestrates artifact generation.
///
/// Holds no state between runs; one pipeline can serve any number of models.
pub struct Pipeline<'a> {
    config: &'a Config,
    policy: Box<dyn ShapePolicy>,
}

impl<'a> Pipeline<'a> {
    /// Create a pipeline; the resource policy follows `resource.hide_internal`.
    pub fn new(config: &'a Config) -> Self {
        let policy: Box<dyn ShapePolicy> = if config.resource.hide_internal {
            Box::new(HideInternal)
        } else {
            Box::new(ExposeAll)
        };
        Self { config, policy }
    }

    /// Replace the resource shape policy.
    pub fn with_policy(mut self, policy: impl ShapePolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    pub fn config(&self) -> &Config {
        self.config
    }

    /// Derive names, classify columns and build rule sets and shape.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidName`] for a bad model name, [`Error::InvalidInput`]
    /// for an empty column list or duplicate column names.
    pub fn analyze(&self, model: &str, columns: &[Column]) -> Result<Analysis> {
        let names = derive_names(model)?;
        validate_columns(&names, columns)?;

        let descriptors = classify_all(columns);
        for desc in &descriptors {
            debug!(
                column = desc.name(),
                kind = desc.kind().as_str(),
                internal = desc.is_internal(),
                "classified column"
            );
        }

        let create_rules = build_rules(&descriptors, RuleContext::Create);
        let update_rules = build_rules(&descriptors, RuleContext::Update);
        let shape = build_shape_with(&descriptors, &*self.policy);

        Ok(Analysis {
            names,
            columns: descriptors,
            create_rules,
            update_rules,
            shape,
        })
    }

    /// Generate every artifact for a model from its columns.
    ///
    /// Nothing is returned unless every step succeeds.
    pub fn generate(
        &self,
        model: &str,
        columns: &[Column],
        include_service: bool,
    ) -> Result<Vec<Artifact>> {
        let analysis = self.analyze(model, columns)?;
        Ok(self.render(&analysis, include_service))
    }

    /// Look the model's table up through `inspector`, then generate.
    ///
    /// # Errors
    ///
    /// [`Error::TableNotFound`] when the table is missing; no generator runs
    /// in that case.
    pub fn run(
        &self,
        inspector: &dyn SchemaInspector,
        model: &str,
        include_service: bool,
    ) -> Result<Vec<Artifact>> {
        let names = derive_names(model)?;
        if !inspector.table_exists(&names.table) {
            return Err(Error::table_not_found(&names.model, &names.table));
        }

        let columns = inspector.columns(&names.table);
        info!(table = %names.table, columns = columns.len(), "inspected table");
        self.generate(model, &columns, include_service)
    }

    fn render(&self, analysis: &Analysis, include_service: bool) -> Vec<Artifact> {
        let config = self.config;
        let names = &analysis.names;
        let mode = ControllerMode::from_flag(include_service);
        let mut artifacts = Vec::with_capacity(6);

        info!(model = %names.model, "generating store request");
        artifacts.push(FormRequestFile::new(config, names, &analysis.create_rules).build());

        info!(model = %names.model, "generating update request");
        artifacts.push(FormRequestFile::new(config, names, &analysis.update_rules).build());

        info!(model = %names.model, "generating resource");
        artifacts.push(ResourceFile::new(config, names, &analysis.shape).build());

        if include_service {
            info!(model = %names.model, "generating service");
            artifacts.push(ServiceFile::new(config, names).build());
        }

        info!(model = %names.model, ?mode, "generating controller");
        artifacts.push(ControllerFile::new(config, names, mode).build());

        info!(model = %names.model, "generating routes");
        artifacts.push(RoutesFile::new(config, names).build());

        artifacts
    }
}

fn validate_columns(names: &NameSet, columns: &[Column]) -> Result<()> {
    if columns.is_empty() {
        return Err(Error::invalid_input(format!(
            "table '{}' has no columns",
            names.table
        )));
    }

    let mut seen = HashSet::with_capacity(columns.len());
    for column in columns {
        if column.name.is_empty() {
            return Err(Error::invalid_input(format!(
                "table '{}' has a column with an empty name",
                names.table
            )));
        }
        if !seen.insert(column.name.as_str()) {
            return Err(Error::invalid_input(format!(
                "duplicate column '{}' in table '{}'",
                column.name, names.table
            )));
        }
    }

    Ok(())
}
