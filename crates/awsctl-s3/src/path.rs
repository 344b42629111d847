//! Path classification and path-type signatures.
//!
//! A path argument is remote when it starts with [`S3_SCHEME`] and local
//! otherwise. Classification never touches the filesystem or the network.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{S3CommandError, S3CommandResult};

/// Prefix that marks a path as an object-store location.
pub const S3_SCHEME: &str = "s3://";

/// Where a single path argument points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    /// A local filesystem path.
    Local,
    /// An object-store location (`s3://bucket[/key]`).
    S3,
}

impl PathKind {
    /// Classify a path by its prefix.
    #[must_use]
    pub fn classify(path: &str) -> Self {
        if path.starts_with(S3_SCHEME) {
            Self::S3
        } else {
            Self::Local
        }
    }
}

/// Local/remote shape of the one or two path arguments of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathSignature {
    /// One local path.
    Local,
    /// One remote path.
    S3,
    /// Local source, remote destination.
    LocalS3,
    /// Remote source, local destination.
    S3Local,
    /// Remote source and destination.
    S3S3,
    /// Local source and destination.
    LocalLocal,
}

impl PathSignature {
    /// Every signature.
    pub const ALL: [Self; 6] = [
        Self::Local,
        Self::S3,
        Self::LocalS3,
        Self::S3Local,
        Self::S3S3,
        Self::LocalLocal,
    ];

    /// Derive the signature of a path list.
    ///
    /// Returns `None` unless there are exactly one or two paths.
    #[must_use]
    pub fn of<P: AsRef<str>>(paths: &[P]) -> Option<Self> {
        let kinds: Vec<PathKind> = paths.iter().map(|p| PathKind::classify(p.as_ref())).collect();
        match kinds.as_slice() {
            [PathKind::Local] => Some(Self::Local),
            [PathKind::S3] => Some(Self::S3),
            [PathKind::Local, PathKind::S3] => Some(Self::LocalS3),
            [PathKind::S3, PathKind::Local] => Some(Self::S3Local),
            [PathKind::S3, PathKind::S3] => Some(Self::S3S3),
            [PathKind::Local, PathKind::Local] => Some(Self::LocalLocal),
            _ => None,
        }
    }

    /// The short code of this signature, e.g. `locals3`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::S3 => "s3",
            Self::LocalS3 => "locals3",
            Self::S3Local => "s3local",
            Self::S3S3 => "s3s3",
            Self::LocalLocal => "locallocal",
        }
    }

    /// Kind of the first (source) path.
    #[must_use]
    pub fn source_kind(self) -> PathKind {
        match self {
            Self::Local | Self::LocalS3 | Self::LocalLocal => PathKind::Local,
            Self::S3 | Self::S3Local | Self::S3S3 => PathKind::S3,
        }
    }
}

impl fmt::Display for PathSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed `s3://bucket/key` location.
///
/// `s3://` alone parses to an empty bucket, which addresses the bucket list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Uri {
    /// Bucket name; empty for `s3://`.
    pub bucket: String,
    /// Key or key prefix; empty when the URI names only a bucket.
    pub key: String,
}

impl S3Uri {
    /// Split an `s3://` path into bucket and key.
    ///
    /// # Errors
    ///
    /// Returns [`S3CommandError::InvalidS3Uri`] if the path is local.
    ///
    /// # Examples
    ///
    /// ```
    /// use awsctl_s3::S3Uri;
    ///
    /// let uri = S3Uri::parse("s3://mybucket/photos/cat.jpg").unwrap();
    /// assert_eq!(uri.bucket, "mybucket");
    /// assert_eq!(uri.key, "photos/cat.jpg");
    /// ```
    pub fn parse(path: &str) -> S3CommandResult<Self> {
        let rest = path
            .strip_prefix(S3_SCHEME)
            .ok_or_else(|| S3CommandError::InvalidS3Uri(path.to_owned()))?;
        let (bucket, key) = rest.split_once('/').unwrap_or((rest, ""));
        Ok(Self {
            bucket: bucket.to_owned(),
            key: key.to_owned(),
        })
    }

    /// The `s3://bucket` location of this URI's bucket.
    #[must_use]
    pub fn bucket_uri(&self) -> String {
        format!("{S3_SCHEME}{}", self.bucket)
    }
}

impl fmt::Display for S3Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.key.is_empty() {
            write!(f, "{S3_SCHEME}{}", self.bucket)
        } else {
            write!(f, "{S3_SCHEME}{}/{}", self.bucket, self.key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const S3_FILE: &str = "s3://mybucket/text1.txt";
    const LOCAL_FILE: &str = "some/dir/text1.txt";

    #[test]
    fn test_should_classify_by_scheme_prefix() {
        assert_eq!(PathKind::classify(S3_FILE), PathKind::S3);
        assert_eq!(PathKind::classify("s3://"), PathKind::S3);
        assert_eq!(PathKind::classify(LOCAL_FILE), PathKind::Local);
        assert_eq!(PathKind::classify("/abs/path"), PathKind::Local);
        assert_eq!(PathKind::classify("S3://upper"), PathKind::Local);
        assert_eq!(PathKind::classify("s3:/one-slash"), PathKind::Local);
    }

    #[test]
    fn test_should_derive_every_signature() {
        let cases = [
            (vec![LOCAL_FILE], PathSignature::Local),
            (vec![S3_FILE], PathSignature::S3),
            (vec![LOCAL_FILE, S3_FILE], PathSignature::LocalS3),
            (vec![S3_FILE, LOCAL_FILE], PathSignature::S3Local),
            (vec![S3_FILE, S3_FILE], PathSignature::S3S3),
            (vec![LOCAL_FILE, LOCAL_FILE], PathSignature::LocalLocal),
        ];
        for (paths, expected) in cases {
            assert_eq!(PathSignature::of(paths.as_slice()), Some(expected), "{paths:?}");
        }
    }

    #[test]
    fn test_should_reject_wrong_path_counts() {
        let none: [&str; 0] = [];
        assert_eq!(PathSignature::of(&none), None);
        assert_eq!(PathSignature::of(&[S3_FILE, S3_FILE, S3_FILE]), None);
    }

    #[test]
    fn test_should_format_signature_codes() {
        let codes: Vec<&str> = PathSignature::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            codes,
            ["local", "s3", "locals3", "s3local", "s3s3", "locallocal"]
        );
        assert_eq!(
            serde_json::to_string(&PathSignature::S3Local).unwrap(),
            "\"s3local\""
        );
    }

    #[test]
    fn test_should_parse_s3_uri() {
        let uri = S3Uri::parse("s3://mybucket/").unwrap();
        assert_eq!(uri.bucket, "mybucket");
        assert_eq!(uri.key, "");

        let uri = S3Uri::parse("s3://mybucket").unwrap();
        assert_eq!(uri.bucket, "mybucket");
        assert_eq!(uri.key, "");
        assert_eq!(uri.bucket_uri(), "s3://mybucket");

        let uri = S3Uri::parse("s3://").unwrap();
        assert!(uri.bucket.is_empty());
    }

    #[test]
    fn test_should_display_s3_uri() {
        assert_eq!(S3Uri::parse(S3_FILE).unwrap().to_string(), S3_FILE);
        assert_eq!(S3Uri::parse("s3://b").unwrap().to_string(), "s3://b");
    }

    #[test]
    fn test_should_reject_local_path_as_s3_uri() {
        assert!(matches!(
            S3Uri::parse(LOCAL_FILE),
            Err(S3CommandError::InvalidS3Uri(_))
        ));
    }
}
