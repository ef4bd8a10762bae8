//! Core operations.
//!
//! This module contains the business logic for crud commands,
//! separated from CLI argument parsing and output rendering.

pub mod explain;
pub mod generate;
pub mod init;
pub mod tables;

pub use explain::explain;
pub use generate::{GenerateOptions, generate, locate_table};
pub use init::init;
pub use tables::tables;
