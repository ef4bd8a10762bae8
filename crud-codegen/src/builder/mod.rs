//! Code generation building blocks.

mod code_builder;

pub use code_builder::CodeBuilder;
