use std::path::PathBuf;

use autocrud_manifest::{Config, SchemaSnapshot};
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{ops, reports::emit};

#[derive(Args)]
pub struct ExplainCommand {
    /// Model name, e.g. Post or BlogPost
    pub model: String,

    /// Path to crud.toml (defaults to ./crud.toml)
    #[arg(short, long, default_value = "crud.toml")]
    pub config: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl ExplainCommand {
    pub fn run(&self) -> Result<()> {
        let config = Config::load(&self.config).unwrap_or_exit();
        let schema = SchemaSnapshot::from_file(config.schema_path(&self.config)).unwrap_or_exit();

        let report = ops::explain(&config, &schema, &self.model).unwrap_or_exit();
        emit(&report, self.json)
    }
}
