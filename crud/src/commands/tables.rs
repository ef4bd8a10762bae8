use std::path::PathBuf;

use autocrud_manifest::{Config, SchemaSnapshot};
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{ops, reports::emit};

#[derive(Args)]
pub struct TablesCommand {
    /// Path to crud.toml (defaults to ./crud.toml)
    #[arg(short, long, default_value = "crud.toml")]
    pub config: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl TablesCommand {
    pub fn run(&self) -> Result<()> {
        let config = Config::load(&self.config).unwrap_or_exit();
        let schema_path = config.schema_path(&self.config);
        let schema = SchemaSnapshot::from_file(&schema_path).unwrap_or_exit();

        let report = ops::tables(&schema, &schema_path);
        emit(&report, self.json)
    }
}
