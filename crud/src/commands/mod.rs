mod completions;
mod explain;
mod generate;
mod init;
mod tables;

use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use explain::ExplainCommand;
use generate::GenerateCommand;
use init::InitCommand;
use tables::TablesCommand;

/// Extension trait for exiting on configuration and generation errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for autocrud_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for autocrud_codegen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "crud")]
#[command(version)]
#[command(about = "Generate Laravel CRUD scaffolding from your database schema")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        crate::logging::init(self.verbose);

        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Explain(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Tables(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate requests, resource, controller and routes for a model
    Generate(GenerateCommand),

    /// Show how a model's columns are classified and validated
    Explain(ExplainCommand),

    /// Create crud.toml and an example schema.toml
    Init(InitCommand),

    /// List tables in the schema snapshot
    Tables(TablesCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
