//! Generate command report data structures.

use std::path::PathBuf;

use autocrud_codegen::ArtifactKind;
use serde::Serialize;

use super::output::{Output, Report};

/// Report data from artifact generation.
#[derive(Debug, Serialize)]
pub struct GenerateReport {
    /// Model the artifacts were generated for.
    pub model: String,
    /// Table the columns came from.
    pub table: String,
    /// Whether a service layer was generated.
    pub include_service: bool,
    /// PHP line that loads the generated routes file.
    pub routes_require: Option<String>,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of artifact generation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug, Serialize)]
pub struct WrittenResult {
    /// Project root.
    pub output_dir: PathBuf,
    /// Every artifact, in pipeline order.
    pub artifacts: Vec<WrittenArtifact>,
}

/// One artifact handed to the writer.
#[derive(Debug, Serialize)]
pub struct WrittenArtifact {
    pub kind: ArtifactKind,
    /// Path relative to the project root.
    pub path: String,
    /// False when an existing file was kept.
    pub written: bool,
}

/// Result of a dry-run preview.
#[derive(Debug, Serialize)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug, Serialize)]
pub struct PreviewFile {
    pub kind: ArtifactKind,
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn mode(&self) -> &'static str {
        if self.include_service {
            "with service"
        } else {
            "without service"
        }
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.preformatted(&format!("{} ({}, {})", self.model, self.table, self.mode()));
        out.newline();

        out.section(&format!("Artifacts ({})", written.artifacts.len()));
        for artifact in &written.artifacts {
            let line = format!("{:<15} {}", artifact.kind.label(), artifact.path);
            if artifact.written {
                out.added_item(&line);
            } else {
                out.skipped_item(&format!("{} (exists, skipped)", line));
            }
        }

        let skipped = written.artifacts.iter().filter(|a| !a.written).count();
        if skipped > 0 {
            out.newline();
            out.warning(&format!(
                "{} existing file{} kept; pass --force to overwrite",
                skipped,
                if skipped == 1 { "" } else { "s" }
            ));
        }

        out.newline();
        out.key_value("Generated", &written.output_dir.display().to_string());
        self.render_routes_hint(out);
    }

    fn render_routes_hint(&self, out: &mut dyn Output) {
        if let Some(require) = &self.routes_require {
            out.newline();
            out.section("Register the routes in routes/api.php");
            out.preformatted(require);
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&format!("{} · {}", file.kind.label(), file.path));
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be generated for {} ({})",
            preview.files.len(),
            self.model,
            self.mode()
        ));
        self.render_routes_hint(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    fn report(written: bool) -> GenerateReport {
        GenerateReport {
            model: "Post".to_string(),
            table: "posts".to_string(),
            include_service: false,
            routes_require: Some("require __DIR__.'/api/posts.php';".to_string()),
            result: GenerationResult::Written(WrittenResult {
                output_dir: PathBuf::from("."),
                artifacts: vec![
                    WrittenArtifact {
                        kind: ArtifactKind::StoreRequest,
                        path: "app/Http/Requests/StorePostRequest.php".to_string(),
                        written: true,
                    },
                    WrittenArtifact {
                        kind: ArtifactKind::Controller,
                        path: "app/Http/Controllers/PostController.php".to_string(),
                        written,
                    },
                ],
            }),
        }
    }

    #[test]
    fn test_render_lists_artifacts_in_order() {
        let mut out = BufferOutput::default();
        report(true).render(&mut out);

        let text = out.text();
        assert!(text.starts_with("Post (posts, without service)"));
        let store = text.find("Store request").unwrap();
        let controller = text.find("Controller ").unwrap();
        assert!(store < controller);
        assert!(!text.contains("warning"));
    }

    #[test]
    fn test_render_warns_about_skipped_files() {
        let mut out = BufferOutput::default();
        report(false).render(&mut out);

        let text = out.text();
        assert!(text.contains("(exists, skipped)"));
        assert!(text.contains("warning: 1 existing file kept; pass --force to overwrite"));
    }

    #[test]
    fn test_render_tells_how_to_load_routes() {
        let mut out = BufferOutput::default();
        report(true).render(&mut out);

        let text = out.text();
        assert!(text.contains("Register the routes in routes/api.php"));
        assert!(text.contains("require __DIR__.'/api/posts.php';"));
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(report(true)).unwrap();
        assert_eq!(value["result"]["mode"], "written");
        assert_eq!(value["result"]["artifacts"][0]["kind"], "store-request");
        assert_eq!(value["routes_require"], "require __DIR__.'/api/posts.php';");
    }
}
