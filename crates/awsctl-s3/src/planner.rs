//! Path-signature validation and pipeline planning.
//!
//! Both operations are pure lookups against the static command table: the
//! same inputs always produce the same output, and nothing here touches the
//! filesystem or the network.

use awsctl_core::CliConfig;
use serde::Serialize;
use tracing::debug;

use crate::command::{S3Command, Stage};
use crate::endpoint::{ResolvedEndpoints, resolve_endpoints};
use crate::error::{S3CommandError, S3CommandResult};
use crate::listing::ListRequest;
use crate::operation::TransferOperation;
use crate::params::{CommandOptions, CommandParameters};
use crate::path::PathSignature;

/// Check that the local/remote shape of `paths` is allowed for `command`.
///
/// # Errors
///
/// Returns [`S3CommandError::InvalidPathCount`] unless one or two paths are
/// given, and [`S3CommandError::InvalidPathType`] naming the derived
/// signature when the command does not accept it.
///
/// # Examples
///
/// ```
/// use awsctl_s3::{PathSignature, S3Command, planner::validate_path_signature};
///
/// let sig = validate_path_signature(S3Command::Cp, &["file.txt", "s3://bucket/file.txt"]).unwrap();
/// assert_eq!(sig, PathSignature::LocalS3);
/// assert!(validate_path_signature(S3Command::Mb, &["file.txt"]).is_err());
/// ```
pub fn validate_path_signature<P: AsRef<str>>(
    command: S3Command,
    paths: &[P],
) -> S3CommandResult<PathSignature> {
    let signature = PathSignature::of(paths).ok_or(S3CommandError::InvalidPathCount {
        command,
        count: paths.len(),
    })?;

    if !command.spec().allows(signature) {
        debug!(%command, %signature, "rejected path signature");
        return Err(S3CommandError::InvalidPathType { command, signature });
    }

    Ok(signature)
}

/// Resolve the ordered pipeline stages for `command`.
///
/// Only the presence of filter parameters affects the result.
///
/// # Examples
///
/// ```
/// use awsctl_s3::{CommandOptions, S3Command, Stage, planner::plan};
///
/// assert_eq!(plan(S3Command::Mb, &CommandOptions::default()), [Stage::S3Handler]);
/// ```
#[must_use]
pub fn plan(command: S3Command, options: &CommandOptions) -> Vec<Stage> {
    let stages = command.spec().stages_for(options.has_filters());
    debug!(%command, filters = options.has_filters(), ?stages, "resolved pipeline stages");
    stages
}

/// Everything the transfer engine needs to run one command.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionPlan {
    /// The command.
    pub command: S3Command,
    /// Local/remote shape of the path arguments.
    pub paths_type: PathSignature,
    /// User-facing operation name.
    pub operation: TransferOperation,
    /// Ordered pipeline stages; empty for `ls`.
    pub stages: Vec<Stage>,
    /// The listing request for `ls`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<ListRequest>,
    /// Validated command parameters.
    pub parameters: CommandParameters,
    /// Destination and source endpoints.
    pub endpoints: ResolvedEndpoints,
    /// The line printed for a dry run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run_preview: Option<String>,
    /// Plans that must run to completion first (the bucket purge of `rb --force`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pre_steps: Vec<ExecutionPlan>,
}

impl ExecutionPlan {
    /// Plan `parameters` against the process-wide `config`.
    ///
    /// # Errors
    ///
    /// Returns [`S3CommandError::MissingBucket`] if a command other than `ls`
    /// is given the bare `s3://` root, and an error if the `ls` path cannot
    /// be parsed as an `s3://` location.
    pub fn build(parameters: CommandParameters, config: &CliConfig) -> S3CommandResult<Self> {
        parameters.check_buckets()?;

        let command = parameters.command;
        let stages = plan(command, &parameters.options);
        let operation = TransferOperation::for_command(command, parameters.paths_type);
        let endpoints = resolve_endpoints(&parameters, config);

        let list = if command == S3Command::Ls {
            Some(ListRequest::from_path(&parameters.src, parameters.options.dir_op)?)
        } else {
            None
        };

        // `ls` has no dry-run mode.
        let dry_run_preview = (parameters.options.dryrun && command != S3Command::Ls)
            .then(|| operation.dry_run_line(&parameters.src, &parameters.dest));

        let pre_steps = match parameters.force_cleanup()? {
            Some(cleanup) => vec![Self::build(cleanup, config)?],
            None => Vec::new(),
        };

        debug!(
            %command,
            paths_type = %parameters.paths_type,
            %operation,
            pre_steps = pre_steps.len(),
            "built execution plan"
        );

        Ok(Self {
            command,
            paths_type: parameters.paths_type,
            operation,
            stages,
            list,
            parameters,
            endpoints,
            dry_run_preview,
            pre_steps,
        })
    }
}
