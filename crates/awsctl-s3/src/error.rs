//! S3 command error types.

use std::path::PathBuf;

use crate::command::S3Command;
use crate::path::PathSignature;

/// Error raised while validating or planning an S3 command.
#[derive(Debug, thiserror::Error)]
pub enum S3CommandError {
    /// The command name is not one of the supported S3 commands.
    #[error("unknown s3 command: {0}")]
    UnknownCommand(String),

    // -----------------------------------------------------------------------
    // Argument shape errors
    // -----------------------------------------------------------------------
    /// The command was given no path, or more than two.
    #[error("{command} expects one or two paths, got {count}")]
    InvalidPathCount {
        /// The command being validated.
        command: S3Command,
        /// The number of paths supplied.
        count: usize,
    },

    /// The local/remote combination of the paths is not allowed for the command.
    #[error("Invalid argument type: {signature} paths are not allowed for the {command} command")]
    InvalidPathType {
        /// The command being validated.
        command: S3Command,
        /// The signature derived from the supplied paths.
        signature: PathSignature,
    },

    /// The path does not start with `s3://`.
    #[error("not an s3:// path: {0}")]
    InvalidS3Uri(String),

    /// A remote path names no bucket; only `ls` accepts the bare `s3://` root.
    #[error("{command} requires a bucket name: {path}")]
    MissingBucket {
        /// The command being validated.
        command: S3Command,
        /// The offending path.
        path: String,
    },

    // -----------------------------------------------------------------------
    // Local source errors
    // -----------------------------------------------------------------------
    /// The local source does not exist.
    #[error("The user-provided path {} does not exist.", .path.display())]
    SourceNotFound {
        /// The local source path.
        path: PathBuf,
    },

    /// A recursive operation was given a local source that is not a directory.
    #[error("The source {} is not a directory; recursive operations need a directory.", .path.display())]
    SourceNotDirectory {
        /// The local source path.
        path: PathBuf,
    },

    /// A single-object operation was given a local directory.
    #[error("The source {} is a directory; use --recursive to transfer its contents.", .path.display())]
    SourceIsDirectory {
        /// The local source path.
        path: PathBuf,
    },

    /// Reading the local source metadata failed.
    #[error("cannot inspect local source {}", .path.display())]
    Io {
        /// The local source path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Convenience result type for S3 command operations.
pub type S3CommandResult<T> = Result<T, S3CommandError>;
