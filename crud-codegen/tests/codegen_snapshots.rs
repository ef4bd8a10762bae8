//! Snapshot tests for PHP code generation.
//!
//! These tests verify that the generated PHP matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use autocrud_codegen::{Artifact, ArtifactKind, Pipeline};
use autocrud_core::Column;
use autocrud_manifest::Config;

fn post_columns() -> Vec<Column> {
    ["id", "title", "body", "user_id", "created_at", "updated_at"]
        .into_iter()
        .map(Column::from)
        .collect()
}

fn user_columns() -> Vec<Column> {
    vec![
        Column::typed("id", "bigint unsigned"),
        Column::typed("name", "varchar(255)"),
        Column::typed("email", "varchar(255)"),
        Column::typed("password", "varchar(255)"),
        Column::new("is_admin"),
        Column::typed("age", "integer"),
        Column::typed("team_id", "bigint"),
        Column::typed("settings", "json"),
        Column::typed("remember_token", "varchar(100)"),
        Column::typed("email_verified_at", "timestamp"),
        Column::typed("created_at", "timestamp"),
    ]
}

/// Generate artifacts and return the content of the one with the given kind.
fn generate(config: &Config, model: &str, columns: &[Column], service: bool) -> Vec<Artifact> {
    Pipeline::new(config)
        .generate(model, columns, service)
        .expect("generation failed")
}

fn content(artifacts: &[Artifact], kind: ArtifactKind) -> &str {
    artifacts
        .iter()
        .find(|a| a.kind == kind)
        .map(|a| a.content.as_str())
        .expect("artifact not generated")
}

#[test]
fn test_post_store_request() {
    let artifacts = generate(&Config::default(), "Post", &post_columns(), false);
    insta::assert_snapshot!(
        "post_store_request",
        content(&artifacts, ArtifactKind::StoreRequest)
    );
}

#[test]
fn test_post_update_request() {
    let artifacts = generate(&Config::default(), "Post", &post_columns(), false);
    insta::assert_snapshot!(
        "post_update_request",
        content(&artifacts, ArtifactKind::UpdateRequest)
    );
}

#[test]
fn test_post_resource() {
    let artifacts = generate(&Config::default(), "Post", &post_columns(), false);
    insta::assert_snapshot!("post_resource", content(&artifacts, ArtifactKind::Resource));
}

#[test]
fn test_post_service() {
    let artifacts = generate(&Config::default(), "Post", &post_columns(), true);
    insta::assert_snapshot!("post_service", content(&artifacts, ArtifactKind::Service));
}

#[test]
fn test_post_controller_without_service() {
    let artifacts = generate(&Config::default(), "Post", &post_columns(), false);
    insta::assert_snapshot!(
        "post_controller_without_service",
        content(&artifacts, ArtifactKind::Controller)
    );
}

#[test]
fn test_post_controller_with_service() {
    let artifacts = generate(&Config::default(), "Post", &post_columns(), true);
    insta::assert_snapshot!(
        "post_controller_with_service",
        content(&artifacts, ArtifactKind::Controller)
    );
}

#[test]
fn test_post_routes() {
    let artifacts = generate(&Config::default(), "Post", &post_columns(), false);
    insta::assert_snapshot!("post_routes", content(&artifacts, ArtifactKind::Routes));
}

#[test]
fn test_user_store_request_with_typed_columns() {
    let artifacts = generate(&Config::default(), "User", &user_columns(), false);
    insta::assert_snapshot!(
        "user_store_request",
        content(&artifacts, ArtifactKind::StoreRequest)
    );
}

#[test]
fn test_user_resource_hides_internal_columns() {
    let mut config = Config::default();
    config.resource.hide_internal = true;

    let artifacts = generate(&config, "User", &user_columns(), false);
    insta::assert_snapshot!(
        "user_resource_hide_internal",
        content(&artifacts, ArtifactKind::Resource)
    );
}

#[test]
fn test_custom_namespaces_and_paths() {
    let config: Config = r#"
        [namespaces]
        models = "Domain\\Blog\\Models"
        controllers = "App\\Http\\Controllers\\Api"

        [paths]
        controllers = "app/Http/Controllers/Api"
        routes = "routes/blog"
    "#
    .parse()
    .expect("Failed to parse config");

    let artifacts = generate(&config, "Post", &post_columns(), false);

    let targets: Vec<String> = artifacts
        .iter()
        .map(|a| a.target.display().to_string())
        .collect();
    assert_eq!(
        targets,
        [
            "app/Http/Requests/StorePostRequest.php",
            "app/Http/Requests/UpdatePostRequest.php",
            "app/Http/Resources/PostResource.php",
            "app/Http/Controllers/Api/PostController.php",
            "routes/blog/posts.php",
        ]
    );

    insta::assert_snapshot!(
        "post_controller_custom_namespaces",
        content(&artifacts, ArtifactKind::Controller)
    );
}
