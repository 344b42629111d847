//! Cross-crate tests for awsctl.
//!
//! These exercise the S3 planner and the EMR catalog through their public
//! APIs only, the way the `awsctl` binary drives them. Nothing here needs a
//! network or a running server.

use std::sync::Once;

use awsctl_s3::PathSignature;

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// A remote object path.
pub const S3_FILE: &str = "s3://mybucket/text1.txt";

/// A local file path.
pub const LOCAL_FILE: &str = "text1.txt";

/// Path arguments that produce `signature`.
#[must_use]
pub fn paths_for(signature: PathSignature) -> Vec<&'static str> {
    match signature {
        PathSignature::Local => vec![LOCAL_FILE],
        PathSignature::S3 => vec![S3_FILE],
        PathSignature::LocalS3 => vec![LOCAL_FILE, S3_FILE],
        PathSignature::S3Local => vec![S3_FILE, LOCAL_FILE],
        PathSignature::S3S3 => vec![S3_FILE, S3_FILE],
        PathSignature::LocalLocal => vec![LOCAL_FILE, LOCAL_FILE],
    }
}

mod test_emr;
mod test_path_types;
mod test_plan;
