//! Configuration management for awsctl.
//!
//! Provides [`CliConfig`], the process-wide settings the command front end
//! resolves once at startup and then passes explicitly into each command.
//! Values are loaded from environment variables, matching the AWS CLI
//! conventions where one exists.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::{CoreError, CoreResult};
use crate::types::AwsRegion;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// One line per item.
    Text,
}

impl FromStr for OutputFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            other => Err(CoreError::Config(format!(
                "unsupported output format {other:?} (expected json or text)"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Text => f.write_str("text"),
        }
    }
}

/// Global configuration for awsctl.
///
/// # Examples
///
/// ```
/// use awsctl_core::CliConfig;
///
/// let config = CliConfig::default();
/// assert!(config.default_region.is_none());
/// assert!(config.verify_ssl);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct CliConfig {
    /// Region used when a command does not pass `--region`.
    #[builder(default, setter(strip_option))]
    pub default_region: Option<AwsRegion>,

    /// Endpoint URL override used when a command does not pass `--endpoint-url`.
    #[builder(default, setter(strip_option, into))]
    pub endpoint_url: Option<String>,

    /// Whether TLS certificates are verified by default.
    #[builder(default = true)]
    pub verify_ssl: bool,

    /// Log level filter string (e.g. `"warn"`, `"debug"`).
    #[builder(default = String::from("warn"), setter(into))]
    pub log_level: String,

    /// Output format for command results.
    #[builder(default)]
    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_region: None,
            endpoint_url: None,
            verify_ssl: true,
            log_level: String::from("warn"),
            output: OutputFormat::Json,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `AWS_REGION` / `AWS_DEFAULT_REGION` | *(unset)* |
    /// | `AWS_ENDPOINT_URL` | *(unset)* |
    /// | `AWSCTL_VERIFY_SSL` | `true` |
    /// | `LOG_LEVEL` | `warn` |
    /// | `AWSCTL_OUTPUT` | `json` |
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRegion`] or [`CoreError::Config`] when a
    /// variable is set to a value that cannot be used.
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// [`CliConfig::from_env`] delegates here with `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("AWS_REGION").or_else(|| lookup("AWS_DEFAULT_REGION")) {
            if !v.is_empty() {
                config.default_region = Some(AwsRegion::parse(v)?);
            }
        }
        if let Some(v) = lookup("AWS_ENDPOINT_URL") {
            if !v.is_empty() {
                config.endpoint_url = Some(v);
            }
        }
        if let Some(v) = lookup("AWSCTL_VERIFY_SSL") {
            config.verify_ssl = parse_bool(&v);
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }
        if let Some(v) = lookup("AWSCTL_OUTPUT") {
            config.output = v.parse()?;
        }

        Ok(config)
    }
}

/// Parse a string as a boolean, accepting `"1"` and `"true"` (case-insensitive).
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
