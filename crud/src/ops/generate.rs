//! Generate operation - write or preview artifacts for a model.

use std::path::Path;

use autocrud_codegen::{Artifact, ArtifactKind, Error, NameSet, derive_names};
use autocrud_core::{ArtifactWriter, FsWriter, Overwrite, SchemaInspector, WriteResult};
use eyre::Result;
use tracing::debug;

use crate::reports::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenArtifact, WrittenResult,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Project root artifacts are written below.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// What to do with files that already exist.
    pub overwrite: Overwrite,
    /// Whether a service was requested.
    pub include_service: bool,
}

/// Check that the model name is valid and its table exists.
///
/// Lets the command fail before prompting for anything.
pub fn locate_table(
    inspector: &dyn SchemaInspector,
    model: &str,
) -> autocrud_codegen::Result<NameSet> {
    let names = derive_names(model)?;
    if inspector.table_exists(&names.table) {
        Ok(names)
    } else {
        Err(Error::table_not_found(&names.model, &names.table))
    }
}

/// Execute the generate operation.
///
/// Artifacts come from a completed pipeline run, so they are either all
/// present or the run already failed.
pub fn generate(
    names: &NameSet,
    artifacts: Vec<Artifact>,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let require_line = artifacts
        .iter()
        .find(|a| a.kind == ArtifactKind::Routes)
        .map(|a| routes_require(&a.target));

    let result = if opts.dry_run {
        let files = artifacts
            .into_iter()
            .map(|a| PreviewFile {
                kind: a.kind,
                path: a.target.display().to_string(),
                content: a.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let mut writer = FsWriter::new(opts.output_dir, opts.overwrite);
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            artifacts: write_artifacts(&artifacts, &mut writer)?,
        })
    };

    Ok(GenerateReport {
        model: names.model.clone(),
        table: names.table.clone(),
        include_service: opts.include_service,
        routes_require: require_line,
        result,
    })
}

/// The PHP line that loads a generated routes file.
///
/// Laravel only loads the files registered in `bootstrap/app.php`, so a
/// routes file below `routes/` is pulled in from `routes/api.php` relative
/// to that directory; anything else is required from the project root.
pub fn routes_require(target: &Path) -> String {
    match target.strip_prefix("routes") {
        Ok(rest) => format!("require __DIR__.'/{}';", slash_path(rest)),
        Err(_) => format!("require base_path('{}');", slash_path(target)),
    }
}

fn slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Hand every artifact to `writer`, in pipeline order.
pub fn write_artifacts(
    artifacts: &[Artifact],
    writer: &mut dyn ArtifactWriter,
) -> Result<Vec<WrittenArtifact>> {
    artifacts
        .iter()
        .map(|artifact| {
            let result = artifact.write(writer)?;
            debug!(path = %artifact.target.display(), ?result, "wrote artifact");
            Ok(WrittenArtifact {
                kind: artifact.kind,
                path: artifact.target.display().to_string(),
                written: result == WriteResult::Written,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use autocrud_codegen::{
        ArtifactKind, Pipeline,
        testing::{MemorySchema, RecordingWriter},
    };
    use autocrud_core::Column;
    use autocrud_manifest::Config;
    use tempfile::TempDir;

    use super::*;

    fn schema() -> MemorySchema {
        MemorySchema::new().table("posts", ["id", "title", "user_id", "created_at"])
    }

    fn artifacts(service: bool) -> Vec<Artifact> {
        let config = Config::default();
        Pipeline::new(&config)
            .run(&schema(), "Post", service)
            .unwrap()
    }

    #[test]
    fn test_locate_table() {
        let names = locate_table(&schema(), "Post").unwrap();
        assert_eq!(names.table, "posts");

        let err = locate_table(&schema(), "Comment").unwrap_err();
        assert_eq!(err, Error::table_not_found("Comment", "comments"));

        let err = locate_table(&schema(), "").unwrap_err();
        assert!(matches!(err, Error::InvalidName { .. }));
    }

    #[test]
    fn test_write_artifacts_in_pipeline_order() {
        let mut writer = RecordingWriter::new();
        let written = write_artifacts(&artifacts(true), &mut writer).unwrap();

        let kinds: Vec<ArtifactKind> = written.iter().map(|w| w.kind).collect();
        assert_eq!(kinds, ArtifactKind::ALL);
        assert_eq!(writer.writes().len(), 6);
        assert!(written.iter().all(|w| w.written));
    }

    #[test]
    fn test_generate_writes_below_output_dir() {
        let temp = TempDir::new().unwrap();
        let names = derive_names("Post").unwrap();

        let report = generate(
            &names,
            artifacts(false),
            GenerateOptions {
                output_dir: temp.path(),
                dry_run: false,
                overwrite: Overwrite::IfMissing,
                include_service: false,
            },
        )
        .unwrap();

        let GenerationResult::Written(written) = &report.result else {
            panic!("expected written result");
        };
        assert_eq!(written.artifacts.len(), 5);
        assert_eq!(
            report.routes_require.as_deref(),
            Some("require __DIR__.'/api/posts.php';")
        );

        let routes = fs::read_to_string(temp.path().join("routes/api/posts.php")).unwrap();
        assert!(routes.contains("Route::get('/posts', [PostController::class, 'index']);"));
        assert!(!temp.path().join("app/Services/PostService.php").exists());
    }

    #[test]
    fn test_routes_require() {
        assert_eq!(
            routes_require(Path::new("routes/api/blog_posts.php")),
            "require __DIR__.'/api/blog_posts.php';"
        );
        assert_eq!(
            routes_require(Path::new("routes/posts.php")),
            "require __DIR__.'/posts.php';"
        );
        assert_eq!(
            routes_require(Path::new("modules/blog/routes/posts.php")),
            "require base_path('modules/blog/routes/posts.php');"
        );
    }

    #[test]
    fn test_generate_skips_existing_files() {
        let temp = TempDir::new().unwrap();
        let names = derive_names("Post").unwrap();
        let controller = temp.path().join("app/Http/Controllers/PostController.php");
        fs::create_dir_all(controller.parent().unwrap()).unwrap();
        fs::write(&controller, "<?php // customized\n").unwrap();

        let opts = || GenerateOptions {
            output_dir: temp.path(),
            dry_run: false,
            overwrite: Overwrite::IfMissing,
            include_service: false,
        };
        let report = generate(&names, artifacts(false), opts()).unwrap();

        let GenerationResult::Written(written) = report.result else {
            panic!("expected written result");
        };
        let skipped: Vec<ArtifactKind> = written
            .artifacts
            .iter()
            .filter(|w| !w.written)
            .map(|w| w.kind)
            .collect();
        assert_eq!(skipped, [ArtifactKind::Controller]);
        assert_eq!(fs::read_to_string(&controller).unwrap(), "<?php // customized\n");
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let names = derive_names("Post").unwrap();

        let report = generate(
            &names,
            artifacts(true),
            GenerateOptions {
                output_dir: temp.path(),
                dry_run: true,
                overwrite: Overwrite::Always,
                include_service: true,
            },
        )
        .unwrap();

        let GenerationResult::Preview(preview) = report.result else {
            panic!("expected preview result");
        };
        assert_eq!(preview.files.len(), 6);
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_empty_table_reports_invalid_input() {
        let schema = MemorySchema::new().table("posts", Vec::<Column>::new());
        let config = Config::default();

        assert!(locate_table(&schema, "Post").is_ok());
        let err = Pipeline::new(&config).run(&schema, "Post", false).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }
}
