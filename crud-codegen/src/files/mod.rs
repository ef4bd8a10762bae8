//! One template per generated PHP file.
//!
//! Each template knows its artifact kind, the path it is written to, and how
//! to render itself. Templates read names and configuration only; every
//! generation decision arrives already made.

use std::path::PathBuf;

use crate::artifact::{Artifact, ArtifactKind};

/// Common PHP framework classes referenced by generated files.
pub mod classes {
    pub const FORM_REQUEST: &str = "Illuminate\\Foundation\\Http\\FormRequest";
    pub const JSON_RESOURCE: &str = "Illuminate\\Http\\Resources\\Json\\JsonResource";
    pub const RESOURCE_COLLECTION: &str =
        "Illuminate\\Http\\Resources\\Json\\AnonymousResourceCollection";
    pub const REQUEST: &str = "Illuminate\\Http\\Request";
    pub const RESPONSE: &str = "Illuminate\\Http\\Response";
    pub const COLLECTION: &str = "Illuminate\\Database\\Eloquent\\Collection";
    pub const ROUTE: &str = "Illuminate\\Support\\Facades\\Route";
}

mod controller;
mod form_request;
mod resource;
mod routes;
mod service;

pub use controller::ControllerFile;
pub use form_request::FormRequestFile;
pub use resource::ResourceFile;
pub use routes::RoutesFile;
pub use service::ServiceFile;

/// A PHP source file produced by the pipeline.
pub trait ArtifactTemplate {
    fn kind(&self) -> ArtifactKind;

    /// Path relative to the project root.
    fn target(&self) -> PathBuf;

    fn render(&self) -> String;

    fn build(&self) -> Artifact {
        Artifact::new(self.kind(), self.target(), self.render())
    }
}

/// Render `return [ ... ];` with one `'key' => value,` entry per line.
fn array_return<I>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let entries: Vec<String> = entries
        .into_iter()
        .map(|(key, value)| format!("    {} => {},", key, value))
        .collect();

    if entries.is_empty() {
        return vec!["return [];".to_string()];
    }

    let mut lines = Vec::with_capacity(entries.len() + 2);
    lines.push("return [".to_string());
    lines.extend(entries);
    lines.push("];".to_string());
    lines
}

/// `blog_posts` -> `blog posts`, for docblocks.
fn words(snake: &str) -> String {
    snake.replace('_', " ")
}
