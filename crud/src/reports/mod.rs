//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod explain;
mod generate;
mod init;
mod output;
mod tables;

pub use explain::{ColumnInfo, ExplainReport, PlannedFile, RouteInfo};
pub use generate::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenArtifact, WrittenResult,
};
pub use init::{InitFile, InitReport};
pub use output::{Report, TerminalOutput, emit};
pub use tables::{TableInfo, TablesReport};
