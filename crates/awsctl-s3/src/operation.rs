//! User-facing operation names and dry-run output.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::command::S3Command;
use crate::path::PathSignature;

/// The operation a command performs, as reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferOperation {
    /// Local to remote.
    Upload,
    /// Remote to local.
    Download,
    /// Remote to remote.
    Copy,
    /// Any `mv`.
    Move,
    /// Object deletion.
    Delete,
    /// Bucket creation.
    MakeBucket,
    /// Bucket removal.
    RemoveBucket,
    /// Bucket or object listing.
    List,
}

impl TransferOperation {
    /// Name the operation of `command` with the given path signature.
    #[must_use]
    pub fn for_command(command: S3Command, signature: PathSignature) -> Self {
        match command {
            S3Command::Cp | S3Command::Sync => match signature {
                PathSignature::LocalS3 => Self::Upload,
                PathSignature::S3Local => Self::Download,
                _ => Self::Copy,
            },
            S3Command::Mv => Self::Move,
            S3Command::Rm => Self::Delete,
            S3Command::Mb => Self::MakeBucket,
            S3Command::Rb => Self::RemoveBucket,
            S3Command::Ls => Self::List,
        }
    }

    /// The operation name printed in progress and dry-run lines.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Download => "download",
            Self::Copy => "copy",
            Self::Move => "move",
            Self::Delete => "delete",
            Self::MakeBucket => "make_bucket",
            Self::RemoveBucket => "remove_bucket",
            Self::List => "list",
        }
    }

    /// Whether the operation has a destination distinct from its source.
    #[must_use]
    pub fn has_destination(self) -> bool {
        matches!(
            self,
            Self::Upload | Self::Download | Self::Copy | Self::Move
        )
    }

    /// The line printed instead of performing the operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use awsctl_s3::TransferOperation;
    ///
    /// assert_eq!(
    ///     TransferOperation::Upload.dry_run_line("a.txt", "s3://b/a.txt"),
    ///     "(dryrun) upload: a.txt to s3://b/a.txt"
    /// );
    /// assert_eq!(
    ///     TransferOperation::Delete.dry_run_line("s3://b/a.txt", "s3://b/a.txt"),
    ///     "(dryrun) delete: s3://b/a.txt"
    /// );
    /// ```
    #[must_use]
    pub fn dry_run_line(self, src: &str, dest: &str) -> String {
        if self.has_destination() {
            format!("(dryrun) {self}: {src} to {dest}")
        } else {
            format!("(dryrun) {self}: {src}")
        }
    }
}

impl fmt::Display for TransferOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
