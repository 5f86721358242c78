//! Command handlers, one per top-level mode of the binary.

pub mod completions;
pub mod config;
pub mod generate;
