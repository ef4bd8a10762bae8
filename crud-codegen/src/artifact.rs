//! Generated artifacts and their kinds.

use std::path::{Path, PathBuf};

use autocrud_core::{ArtifactWriter, WriteResult};
use serde::Serialize;

/// The kind of a generated artifact, in pipeline emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    StoreRequest,
    UpdateRequest,
    Resource,
    Service,
    Controller,
    Routes,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 6] = [
        ArtifactKind::StoreRequest,
        ArtifactKind::UpdateRequest,
        ArtifactKind::Resource,
        ArtifactKind::Service,
        ArtifactKind::Controller,
        ArtifactKind::Routes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::StoreRequest => "store-request",
            ArtifactKind::UpdateRequest => "update-request",
            ArtifactKind::Resource => "resource",
            ArtifactKind::Service => "service",
            ArtifactKind::Controller => "controller",
            ArtifactKind::Routes => "routes",
        }
    }

    /// Human-readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::StoreRequest => "Store request",
            ArtifactKind::UpdateRequest => "Update request",
            ArtifactKind::Resource => "Resource",
            ArtifactKind::Service => "Service",
            ArtifactKind::Controller => "Controller",
            ArtifactKind::Routes => "Routes",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the controller reaches the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControllerMode {
    /// Delegate persistence to the generated service class.
    WithService,
    /// Call the model directly.
    WithoutService,
}

impl ControllerMode {
    pub fn from_flag(include_service: bool) -> Self {
        if include_service {
            ControllerMode::WithService
        } else {
            ControllerMode::WithoutService
        }
    }
}

/// A generated source file: what it is, where it goes, and its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub kind: ArtifactKind,
    /// Location relative to the project root
    pub target: PathBuf,
    pub content: String,
}

impl Artifact {
    pub fn new(kind: ArtifactKind, target: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
            content: content.into(),
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Hand the artifact to a writer.
    pub fn write(&self, writer: &mut dyn ArtifactWriter) -> eyre::Result<WriteResult> {
        writer.write(&self.target, &self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_order_matches_emission_order() {
        let mut sorted = ArtifactKind::ALL;
        sorted.sort();
        assert_eq!(sorted, ArtifactKind::ALL);
    }

    #[test]
    fn test_mode_from_flag() {
        assert_eq!(ControllerMode::from_flag(true), ControllerMode::WithService);
        assert_eq!(ControllerMode::from_flag(false), ControllerMode::WithoutService);
    }

    #[test]
    fn test_kind_serializes_kebab_case() {
        assert_eq!(ArtifactKind::StoreRequest.as_str(), "store-request");
        assert_eq!(ArtifactKind::Routes.to_string(), "routes");
    }
}
