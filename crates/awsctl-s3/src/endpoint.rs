//! Endpoint resolution for S3 commands.
//!
//! Command flags take precedence over the process-wide [`CliConfig`]. A
//! bucket-to-bucket transfer may read its source from a different region
//! than it writes to.

use awsctl_core::{AwsRegion, CliConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::params::CommandParameters;
use crate::path::PathSignature;

/// Connection settings for one side of a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Target region; `None` selects the global endpoint.
    pub region: Option<AwsRegion>,
    /// Explicit endpoint URL, overriding the regional one.
    pub endpoint_url: Option<String>,
    /// Whether TLS certificates are verified.
    pub verify_ssl: bool,
}

/// Endpoints of the destination and the source of a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedEndpoints {
    /// Endpoint for the destination (and every single-path command).
    pub endpoint: EndpointConfig,
    /// Endpoint for the source.
    pub source_endpoint: EndpointConfig,
}

/// Resolve both endpoints of `parameters`.
///
/// The source endpoint equals the destination unless `--source-region` is set
/// and both paths are remote.
///
/// # Examples
///
/// ```
/// use awsctl_core::{AwsRegion, CliConfig};
/// use awsctl_s3::{CommandOptions, CommandParameters, S3Command, endpoint::resolve_endpoints};
///
/// let options = CommandOptions::builder()
///     .source_region(AwsRegion::new("eu-west-1"))
///     .build();
/// let params =
///     CommandParameters::new(S3Command::Cp, &["s3://a/k", "s3://b/k"], options).unwrap();
/// let config = CliConfig::builder().default_region(AwsRegion::new("us-east-1")).build();
///
/// let endpoints = resolve_endpoints(&params, &config);
/// assert_eq!(endpoints.endpoint.region, Some(AwsRegion::new("us-east-1")));
/// assert_eq!(endpoints.source_endpoint.region, Some(AwsRegion::new("eu-west-1")));
/// ```
#[must_use]
pub fn resolve_endpoints(parameters: &CommandParameters, config: &CliConfig) -> ResolvedEndpoints {
    let options = &parameters.options;
    let endpoint = EndpointConfig {
        region: options.region.clone().or_else(|| config.default_region.clone()),
        endpoint_url: options.endpoint_url.clone().or_else(|| config.endpoint_url.clone()),
        verify_ssl: options.verify_ssl.unwrap_or(config.verify_ssl),
    };

    let source_endpoint = match (&options.source_region, parameters.paths_type) {
        (Some(source_region), PathSignature::S3S3) => EndpointConfig {
            region: Some(source_region.clone()),
            ..endpoint.clone()
        },
        _ => endpoint.clone(),
    };

    debug!(
        region = ?endpoint.region,
        source_region = ?source_endpoint.region,
        endpoint_url = ?endpoint.endpoint_url,
        "resolved endpoints"
    );

    ResolvedEndpoints {
        endpoint,
        source_endpoint,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::S3Command;
    use crate::params::CommandOptions;

    fn params(paths: &[&str], options: CommandOptions) -> CommandParameters {
        CommandParameters::new(S3Command::Cp, paths, options).unwrap()
    }

    #[test]
    fn test_should_use_command_region() {
        let params = params(
            &["file.txt", "s3://bucket/file.txt"],
            CommandOptions::builder().region(AwsRegion::new("us-west-2")).build(),
        );
        let config = CliConfig::builder()
            .default_region(AwsRegion::new("eu-west-1"))
            .build();

        let resolved = resolve_endpoints(&params, &config);
        assert_eq!(resolved.endpoint.region, Some(AwsRegion::new("us-west-2")));
        assert_eq!(resolved.source_endpoint, resolved.endpoint);
    }

    #[test]
    fn test_should_fall_back_to_configured_defaults() {
        let params = params(&["file.txt", "s3://bucket/file.txt"], CommandOptions::default());
        let config = CliConfig::builder()
            .default_region(AwsRegion::new("eu-west-1"))
            .endpoint_url("http://localhost:4566")
            .verify_ssl(false)
            .build();

        let resolved = resolve_endpoints(&params, &config);
        assert_eq!(resolved.endpoint.region, Some(AwsRegion::new("eu-west-1")));
        assert_eq!(
            resolved.endpoint.endpoint_url.as_deref(),
            Some("http://localhost:4566")
        );
        assert!(!resolved.endpoint.verify_ssl);
    }

    #[test]
    fn test_should_resolve_without_any_region() {
        let params = params(&["file.txt", "s3://bucket/file.txt"], CommandOptions::default());
        let resolved = resolve_endpoints(&params, &CliConfig::default());
        assert!(resolved.endpoint.region.is_none());
        assert!(resolved.endpoint.verify_ssl);
    }

    #[test]
    fn test_should_override_tls_verification_per_command() {
        let params = params(
            &["file.txt", "s3://bucket/file.txt"],
            CommandOptions::builder().verify_ssl(false).build(),
        );
        let resolved = resolve_endpoints(&params, &CliConfig::default());
        assert!(!resolved.endpoint.verify_ssl);
        assert!(!resolved.source_endpoint.verify_ssl);
    }

    #[test]
    fn test_should_use_source_region_for_bucket_to_bucket() {
        let params = params(
            &["s3://src/key", "s3://dest/key"],
            CommandOptions::builder()
                .region(AwsRegion::new("us-west-2"))
                .source_region(AwsRegion::new("ap-south-1"))
                .endpoint_url("http://localhost:4566")
                .build(),
        );
        let resolved = resolve_endpoints(&params, &CliConfig::default());

        assert_eq!(resolved.endpoint.region, Some(AwsRegion::new("us-west-2")));
        assert_eq!(
            resolved.source_endpoint.region,
            Some(AwsRegion::new("ap-south-1"))
        );
        assert_eq!(
            resolved.source_endpoint.endpoint_url,
            resolved.endpoint.endpoint_url
        );
    }

    #[test]
    fn test_should_ignore_source_region_unless_both_paths_remote() {
        for paths in [
            ["file.txt", "s3://dest/key"],
            ["s3://src/key", "file.txt"],
        ] {
            let params = params(
                &paths,
                CommandOptions::builder()
                    .region(AwsRegion::new("us-west-2"))
                    .source_region(AwsRegion::new("ap-south-1"))
                    .build(),
            );
            let resolved = resolve_endpoints(&params, &CliConfig::default());
            assert_eq!(resolved.source_endpoint, resolved.endpoint, "{paths:?}");
        }
    }
}
