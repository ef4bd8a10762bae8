//! Project configuration read from `crud.toml`.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use autocrud_core::Overwrite;
use serde::Deserialize;

use crate::{
    Error, Result,
    error::SourceContext,
    validate::{find_key_span, validate_namespace, validate_relative_path},
};

/// Root configuration for crud.toml
///
/// Every section is optional; the defaults describe a stock Laravel project.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub namespaces: Namespaces,
    #[serde(default)]
    pub paths: Paths,
    #[serde(default)]
    pub controller: ControllerConfig,
    #[serde(default)]
    pub resource: ResourceConfig,
    #[serde(default)]
    pub schema: SchemaConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[project]` metadata
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub name: Option<String>,
}

/// `[namespaces]` for each generated class family
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Namespaces {
    pub models: String,
    pub requests: String,
    pub resources: String,
    pub services: String,
    pub controllers: String,
}

impl Default for Namespaces {
    fn default() -> Self {
        Self {
            models: "App\\Models".to_string(),
            requests: "App\\Http\\Requests".to_string(),
            resources: "App\\Http\\Resources".to_string(),
            services: "App\\Services".to_string(),
            controllers: "App\\Http\\Controllers".to_string(),
        }
    }
}

/// `[paths]` where each artifact family is written, relative to the project root
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Paths {
    pub requests: PathBuf,
    pub resources: PathBuf,
    pub services: PathBuf,
    pub controllers: PathBuf,
    pub routes: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            requests: PathBuf::from("app/Http/Requests"),
            resources: PathBuf::from("app/Http/Resources"),
            services: PathBuf::from("app/Services"),
            controllers: PathBuf::from("app/Http/Controllers"),
            routes: PathBuf::from("routes/api"),
        }
    }
}

/// `[controller]` options
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerConfig {
    /// Fully qualified base class every generated controller extends
    pub base: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            base: "App\\Http\\Controllers\\Controller".to_string(),
        }
    }
}

/// `[resource]` options
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourceConfig {
    /// Leave internal columns (passwords, tokens) out of serialized output
    pub hide_internal: bool,
}

/// `[schema]` location of the table snapshot
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaConfig {
    pub path: PathBuf,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("schema.toml"),
        }
    }
}

/// `[output]` options
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub overwrite: Overwrite,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "crud.toml")
    }
}

impl Config {
    /// Parse crud.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Config = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        config.validate(&ctx)?;
        Ok(config)
    }

    /// Parse a crud.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse crud.toml if it exists, otherwise fall back to the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve the schema snapshot path relative to the directory holding `config_path`.
    pub fn schema_path(&self, config_path: &Path) -> PathBuf {
        if self.schema.path.is_absolute() {
            return self.schema.path.clone();
        }
        config_path
            .parent()
            .map(|dir| dir.join(&self.schema.path))
            .unwrap_or_else(|| self.schema.path.clone())
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        let namespaces = [
            ("namespaces", "models", &self.namespaces.models),
            ("namespaces", "requests", &self.namespaces.requests),
            ("namespaces", "resources", &self.namespaces.resources),
            ("namespaces", "services", &self.namespaces.services),
            ("namespaces", "controllers", &self.namespaces.controllers),
            ("controller", "base", &self.controller.base),
        ];
        for (section, key, value) in namespaces {
            if let Some(reason) = validate_namespace(value) {
                return Err(ctx.invalid_namespace_error(
                    format!("{}.{}", section, key),
                    value.as_str(),
                    reason,
                    find_key_span(ctx.src(), Some(section), key),
                ));
            }
        }

        let paths = [
            ("requests", &self.paths.requests),
            ("resources", &self.paths.resources),
            ("services", &self.paths.services),
            ("controllers", &self.paths.controllers),
            ("routes", &self.paths.routes),
        ];
        for (key, path) in paths {
            if let Some(reason) = validate_relative_path(path) {
                return Err(ctx.validation_error(
                    format!("paths.{}: {}", key, reason),
                    find_key_span(ctx.src(), Some("paths"), key),
                ));
            }
        }

        Ok(())
    }
}
