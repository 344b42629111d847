//! Core types, configuration, and errors shared by awsctl commands.
//!
//! This crate provides the small set of building blocks every awsctl
//! sub-command needs: the [`AwsRegion`] identifier, the environment-driven
//! [`CliConfig`], and the [`CoreError`] type used when configuration cannot
//! be resolved.

mod config;
mod error;
mod types;

pub use config::{CliConfig, OutputFormat};
pub use error::{CoreError, CoreResult};
pub use types::AwsRegion;
