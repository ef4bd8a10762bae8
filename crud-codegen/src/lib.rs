//! CRUD scaffolding generation for Laravel projects.
//!
//! Given a model name and the columns of its table, the [`Pipeline`]
//! produces a store request, an update request, a JSON resource, an
//! optional service, a controller and a routes file:
//!
//! ```
//! use autocrud_codegen::{ArtifactKind, Pipeline};
//! use autocrud_core::Column;
//! use autocrud_manifest::Config;
//!
//! let config = Config::default();
//! let columns = vec![Column::new("id"), Column::new("title")];
//!
//! let artifacts = Pipeline::new(&config).generate("Post", &columns, false).unwrap();
//! assert_eq!(artifacts.len(), 5);
//! assert_eq!(artifacts[0].kind, ArtifactKind::StoreRequest);
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod artifact;
pub mod builder;
pub mod classify;
mod error;
pub mod files;
pub mod naming;
pub mod php;
pub mod pipeline;
pub mod rules;
pub mod shape;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use artifact::{Artifact, ArtifactKind, ControllerMode};
pub use classify::{ColumnDescriptor, ColumnKind, classify, classify_all};
pub use error::{Error, Result};
pub use naming::{NameSet, derive_names};
pub use pipeline::{Analysis, Pipeline};
pub use rules::{Presence, Rule, RuleContext, RuleSet, build_rules};
pub use shape::{ExposeAll, HideInternal, ResourceShape, ShapePolicy, build_shape, build_shape_with};
