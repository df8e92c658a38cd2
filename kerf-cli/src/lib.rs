//! kerf CLI library
//!
//! This library provides the command-line interface for the kerf word
//! segmentation toolkit.

pub mod commands;
pub mod error;
pub mod output;

pub use error::{CliError, CliResult};
