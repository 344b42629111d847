//! Error catalog for the awsctl EMR commands.
//!
//! Every failure an EMR sub-command reports to the user is one variant of
//! [`EmrError`]. Each variant carries exactly the values its message needs,
//! so a well-typed construction can never leave a placeholder unfilled.
//! When the kind and its values only become known at runtime (for example
//! when rendering an error from command-line input), use
//! [`EmrError::from_params`], which fails with a [`CatalogError`] instead of
//! substituting a blank.
//!
//! ```
//! use awsctl_emr::EmrError;
//!
//! let err = EmrError::MissingParameters {
//!     object_name: "create-cluster".to_owned(),
//!     missing: vec!["--ami-version".to_owned()],
//! };
//! assert_eq!(
//!     err.render(),
//!     "aws: error: The following required parameters are missing for \
//!      create-cluster: --ami-version."
//! );
//! ```

mod catalog;
pub mod constants;
mod error;

pub use catalog::{CatalogError, ErrorParams, ParamValue};
pub use error::{EmrError, EmrErrorKind};
