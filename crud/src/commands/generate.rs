use std::path::PathBuf;

use autocrud_codegen::{NameSet, Pipeline};
use autocrud_core::Overwrite;
use autocrud_manifest::{Config, SchemaSnapshot};
use clap::Args;
use dialoguer::{Confirm, theme::ColorfulTheme};
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::emit,
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Model name, e.g. Post or BlogPost
    pub model: String,

    /// Generate a service class and a controller that uses it
    #[arg(long, conflicts_with = "no_service")]
    pub service: bool,

    /// Generate a controller that uses the model directly
    #[arg(long)]
    pub no_service: bool,

    /// Path to crud.toml (defaults to ./crud.toml)
    #[arg(short, long, default_value = "crud.toml")]
    pub config: PathBuf,

    /// Project root the artifacts are written below
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Overwrite files that already exist
    #[arg(long)]
    pub force: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = Config::load(&self.config).unwrap_or_exit();
        let schema = SchemaSnapshot::from_file(config.schema_path(&self.config)).unwrap_or_exit();

        // Fail on a bad name or missing table before asking anything
        let names = ops::locate_table(&schema, &self.model).unwrap_or_exit();
        let include_service = self.include_service(&names)?;

        let artifacts = Pipeline::new(&config)
            .run(&schema, &self.model, include_service)
            .unwrap_or_exit();

        let overwrite = if self.force {
            Overwrite::Always
        } else {
            config.output.overwrite
        };

        let report = ops::generate(
            &names,
            artifacts,
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
                overwrite,
                include_service,
            },
        )
        .wrap_err("Failed to write generated files")?;

        emit(&report, self.json)
    }

    fn include_service(&self, names: &NameSet) -> Result<bool> {
        if self.service {
            return Ok(true);
        }
        if self.no_service {
            return Ok(false);
        }

        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Do you want to generate a Service for {}?",
                names.model
            ))
            .default(false)
            .interact()
            .wrap_err("Failed to read service choice (pass --service or --no-service)")
    }
}
