//! Command parameters assembled from the command line.
//!
//! [`CommandOptions`] holds the flags of a command as parsed by the front
//! end. [`CommandParameters::new`] validates the path arguments against the
//! command table and fixes the derived values (`src`, `dest`, `paths_type`,
//! forced `dir_op`), so a constructed value is always structurally valid.

use std::path::Path;

use awsctl_core::AwsRegion;
use serde::{Deserialize, Serialize};
use tracing::debug;
use typed_builder::TypedBuilder;

use crate::command::S3Command;
use crate::error::{S3CommandError, S3CommandResult};
use crate::path::{PathKind, PathSignature, S3Uri};
use crate::planner::validate_path_signature;

/// An `--include` or `--exclude` pattern, applied in command-line order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// `--include <pattern>`
    Include(String),
    /// `--exclude <pattern>`
    Exclude(String),
}

/// Flags of an S3 command.
///
/// # Examples
///
/// ```
/// use awsctl_s3::{CommandOptions, Filter};
///
/// let options = CommandOptions::builder()
///     .dryrun(true)
///     .filters(vec![Filter::Include("*".to_owned())])
///     .build();
/// assert!(options.has_filters());
/// assert!(options.follow_symlinks);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
pub struct CommandOptions {
    /// Operate on a directory or prefix (`--recursive`).
    #[builder(default)]
    pub dir_op: bool,
    /// Print what would happen without doing it (`--dryrun`).
    #[builder(default)]
    pub dryrun: bool,
    /// Suppress per-file output (`--quiet`).
    #[builder(default)]
    pub quiet: bool,
    /// Include/exclude patterns.
    #[builder(default)]
    pub filters: Vec<Filter>,
    /// Follow symbolic links when walking local directories.
    #[builder(default = true)]
    pub follow_symlinks: bool,
    /// Delete all objects before removing the bucket (`rb --force`).
    #[builder(default)]
    pub force: bool,
    /// Region of the destination (and, by default, the source).
    #[builder(default, setter(strip_option))]
    pub region: Option<AwsRegion>,
    /// Endpoint URL override.
    #[builder(default, setter(strip_option, into))]
    pub endpoint_url: Option<String>,
    /// TLS verification override.
    #[builder(default, setter(strip_option))]
    pub verify_ssl: Option<bool>,
    /// Region of the source bucket for bucket-to-bucket transfers.
    #[builder(default, setter(strip_option))]
    pub source_region: Option<AwsRegion>,
}

impl Default for CommandOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl CommandOptions {
    /// Whether any include/exclude pattern was given.
    #[must_use]
    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }
}

/// Validated parameters of one command invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandParameters {
    /// The command.
    pub command: S3Command,
    /// Source path (the first path argument).
    pub src: String,
    /// Destination path (the second path argument, or the source when only one was given).
    pub dest: String,
    /// Local/remote shape of the path arguments.
    pub paths_type: PathSignature,
    /// Flags, with `dir_op` forced on for commands that require it.
    #[serde(flatten)]
    pub options: CommandOptions,
}

impl CommandParameters {
    /// Validate `paths` for `command` and assemble the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`S3CommandError::InvalidPathCount`] or
    /// [`S3CommandError::InvalidPathType`] when the paths do not fit the
    /// command, and [`S3CommandError::MissingBucket`] when a remote path
    /// names no bucket.
    pub fn new<P: AsRef<str>>(
        command: S3Command,
        paths: &[P],
        mut options: CommandOptions,
    ) -> S3CommandResult<Self> {
        let paths_type = validate_path_signature(command, paths)?;

        if command.spec().forces_dir_op {
            options.dir_op = true;
        }

        let src = paths[0].as_ref().to_owned();
        let dest = paths.get(1).map_or_else(|| src.clone(), |p| p.as_ref().to_owned());

        debug!(%command, %paths_type, %src, %dest, dir_op = options.dir_op, "assembled command parameters");

        let params = Self {
            command,
            src,
            dest,
            paths_type,
            options,
        };
        params.check_buckets()?;
        Ok(params)
    }

    /// Check that every remote path names a bucket.
    ///
    /// Only `ls` accepts the bare `s3://` root, which lists buckets.
    ///
    /// # Errors
    ///
    /// Returns [`S3CommandError::MissingBucket`] for the first remote path
    /// with an empty bucket.
    pub fn check_buckets(&self) -> S3CommandResult<()> {
        if self.command == S3Command::Ls {
            return Ok(());
        }
        for path in [&self.src, &self.dest] {
            if PathKind::classify(path) == PathKind::S3 && S3Uri::parse(path)?.bucket.is_empty() {
                debug!(command = %self.command, %path, "rejected path without bucket");
                return Err(S3CommandError::MissingBucket {
                    command: self.command,
                    path: path.clone(),
                });
            }
        }
        Ok(())
    }

    /// Check that a local source exists and matches `dir_op`.
    ///
    /// Remote sources are accepted unchecked; verifying them needs the
    /// object-store client.
    ///
    /// # Errors
    ///
    /// Returns [`S3CommandError::SourceNotFound`],
    /// [`S3CommandError::SourceNotDirectory`], or
    /// [`S3CommandError::SourceIsDirectory`] when the local source does not
    /// fit, and [`S3CommandError::Io`] when its metadata cannot be read.
    pub fn check_local_source(&self) -> S3CommandResult<()> {
        if self.paths_type.source_kind() != PathKind::Local {
            return Ok(());
        }

        let path = Path::new(&self.src);
        let metadata = match std::fs::metadata(path) {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(S3CommandError::SourceNotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(source) => {
                return Err(S3CommandError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        match (self.options.dir_op, metadata.is_dir()) {
            (true, false) => Err(S3CommandError::SourceNotDirectory {
                path: path.to_path_buf(),
            }),
            (false, true) => Err(S3CommandError::SourceIsDirectory {
                path: path.to_path_buf(),
            }),
            _ => Ok(()),
        }
    }

    /// Parameters of the recursive `rm` that empties the bucket before
    /// `rb --force` removes it.
    ///
    /// Returns `None` for every other command, or when `--force` is not set.
    ///
    /// # Errors
    ///
    /// Returns [`S3CommandError::InvalidS3Uri`] if the source is not an
    /// `s3://` path, and [`S3CommandError::MissingBucket`] if it names no
    /// bucket.
    pub fn force_cleanup(&self) -> S3CommandResult<Option<Self>> {
        if self.command != S3Command::Rb || !self.options.force {
            return Ok(None);
        }

        let bucket = S3Uri::parse(&self.src)?.bucket_uri();
        let options = CommandOptions {
            dir_op: true,
            filters: Vec::new(),
            force: false,
            ..self.options.clone()
        };
        Self::new(S3Command::Rm, &[bucket], options).map(Some)
    }
}
