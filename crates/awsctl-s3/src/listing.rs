//! The request behind `ls`.

use serde::{Deserialize, Serialize};

use crate::error::S3CommandResult;
use crate::path::S3Uri;

const DELIMITER: &str = "/";

/// What `ls` asks the object store for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListRequest {
    /// List every bucket owned by the caller (`ls s3://`).
    Buckets,
    /// List objects under a prefix.
    Objects {
        /// Bucket to list.
        bucket: String,
        /// Key prefix; empty lists from the bucket root.
        prefix: String,
        /// Grouping delimiter; `None` for a recursive listing.
        #[serde(skip_serializing_if = "Option::is_none")]
        delimiter: Option<String>,
    },
}

impl ListRequest {
    /// Derive the listing request for an `ls` path.
    ///
    /// # Errors
    ///
    /// Returns [`crate::S3CommandError::InvalidS3Uri`] if `path` is local.
    ///
    /// # Examples
    ///
    /// ```
    /// use awsctl_s3::ListRequest;
    ///
    /// assert_eq!(ListRequest::from_path("s3://", false).unwrap(), ListRequest::Buckets);
    /// ```
    pub fn from_path(path: &str, recursive: bool) -> S3CommandResult<Self> {
        let uri = S3Uri::parse(path)?;
        if uri.bucket.is_empty() {
            return Ok(Self::Buckets);
        }
        Ok(Self::Objects {
            bucket: uri.bucket,
            prefix: uri.key,
            delimiter: (!recursive).then(|| DELIMITER.to_owned()),
        })
    }
}
