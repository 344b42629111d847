//! Path validation and pipeline planning for the awsctl S3 transfer commands.
//!
//! The high-level S3 commands (`cp`, `mv`, `rm`, `sync`, `mb`, `rb`, `ls`)
//! are not executed here. This crate decides whether a command line makes
//! sense and what the transfer engine should run for it:
//!
//! 1. [`planner::validate_path_signature`] classifies each path argument as
//!    local or remote and checks the resulting [`PathSignature`] against the
//!    command's allowed set.
//! 2. [`planner::plan`] resolves the ordered list of pipeline [`Stage`]s for
//!    the command from its static [`CommandSpec`] table.
//! 3. [`ExecutionPlan::build`] bundles the stages with the resolved
//!    parameters and endpoints for hand-off to the engine.
//!
//! # Architecture
//!
//! ```text
//! argv ──> CommandParameters::new ──> validate_path_signature
//!                                          |
//!                                          v
//!          ExecutionPlan::build ──> plan ──> [file_generator, filters?, ..., s3_handler]
//!                 |
//!                 v
//!          external transfer engine
//! ```

pub mod command;
pub mod endpoint;
pub mod error;
pub mod listing;
pub mod operation;
pub mod params;
pub mod path;
pub mod planner;

pub use command::{CommandSpec, S3Command, Stage, StageSlot, StageTrigger};
pub use endpoint::{EndpointConfig, ResolvedEndpoints};
pub use error::{S3CommandError, S3CommandResult};
pub use listing::ListRequest;
pub use operation::TransferOperation;
pub use params::{CommandOptions, CommandParameters, Filter};
pub use path::{PathKind, PathSignature, S3Uri};
pub use planner::ExecutionPlan;
