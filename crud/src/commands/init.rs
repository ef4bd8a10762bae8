use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InitCommand {
    /// Project root (defaults to current directory)
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::init(&self.dir).wrap_err("Failed to initialize project")?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
