//! Shapebench CLI library
//!
//! This library provides the command-line interface for the shapebench
//! line-shaping tool.

pub mod cli;
pub mod output;

pub use cli::Cli;
