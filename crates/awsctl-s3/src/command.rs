//! The S3 command table.
//!
//! Each [`S3Command`] maps to one immutable [`CommandSpec`] describing the
//! path signatures it accepts and the ordered pipeline stages it runs. The
//! table is plain static data so it can be audited and tested on its own.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::S3CommandError;
use crate::path::PathSignature;

/// A high-level S3 command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum S3Command {
    /// Copy objects or files.
    Cp,
    /// Move objects or files.
    Mv,
    /// Delete objects.
    Rm,
    /// Synchronize a directory and a prefix.
    Sync,
    /// Make a bucket.
    Mb,
    /// Remove a bucket.
    Rb,
    /// List buckets or objects.
    Ls,
}

impl S3Command {
    /// Every supported command.
    pub const ALL: [Self; 7] = [
        Self::Cp,
        Self::Mv,
        Self::Rm,
        Self::Sync,
        Self::Mb,
        Self::Rb,
        Self::Ls,
    ];

    /// The command name as typed on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cp => "cp",
            Self::Mv => "mv",
            Self::Rm => "rm",
            Self::Sync => "sync",
            Self::Mb => "mb",
            Self::Rb => "rb",
            Self::Ls => "ls",
        }
    }

    /// The static table entry of this command.
    #[must_use]
    pub fn spec(self) -> &'static CommandSpec {
        match self {
            Self::Cp => &CP,
            Self::Mv => &MV,
            Self::Rm => &RM,
            Self::Sync => &SYNC,
            Self::Mb => &MB,
            Self::Rb => &RB,
            Self::Ls => &LS,
        }
    }
}

impl fmt::Display for S3Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for S3Command {
    type Err = S3CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.as_str() == s)
            .ok_or_else(|| S3CommandError::UnknownCommand(s.to_owned()))
    }
}

/// A named unit of work run by the transfer engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Enumerate source files or objects.
    FileGenerator,
    /// Apply `--include` / `--exclude` filters.
    Filters,
    /// Compare source and destination to decide what to sync.
    Comparator,
    /// Turn listings into transfer tasks.
    FileInfoBuilder,
    /// Execute requests against the object store.
    S3Handler,
}

impl Stage {
    /// The stage identifier handed to the engine.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FileGenerator => "file_generator",
            Self::Filters => "filters",
            Self::Comparator => "comparator",
            Self::FileInfoBuilder => "file_info_builder",
            Self::S3Handler => "s3_handler",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When a stage slot is included in a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageTrigger {
    /// Always included.
    Always,
    /// Included only when filter parameters are present.
    Filters,
}

/// One position in a command's stage table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageSlot {
    /// The stage at this position.
    pub stage: Stage,
    /// Condition for including it.
    pub trigger: StageTrigger,
}

impl StageSlot {
    const fn always(stage: Stage) -> Self {
        Self {
            stage,
            trigger: StageTrigger::Always,
        }
    }

    const fn with_filters(stage: Stage) -> Self {
        Self {
            stage,
            trigger: StageTrigger::Filters,
        }
    }

    /// Whether this slot is part of a plan with the given filter presence.
    #[must_use]
    pub fn is_active(&self, has_filters: bool) -> bool {
        match self.trigger {
            StageTrigger::Always => true,
            StageTrigger::Filters => has_filters,
        }
    }
}

/// Static configuration of one command.
#[derive(Debug)]
pub struct CommandSpec {
    /// The command this entry describes.
    pub command: S3Command,
    /// Path signatures the command accepts.
    pub allowed_path_signatures: &'static [PathSignature],
    /// Ordered stage table. Conditional stages sit at their fixed position.
    pub stages: &'static [StageSlot],
    /// Whether the command always operates on a directory or prefix.
    pub forces_dir_op: bool,
}

impl CommandSpec {
    /// Whether `signature` is accepted by this command.
    #[must_use]
    pub fn allows(&self, signature: PathSignature) -> bool {
        self.allowed_path_signatures.contains(&signature)
    }

    /// Stages that always run, in order.
    pub fn base_stages(&self) -> impl Iterator<Item = Stage> + '_ {
        self.stages
            .iter()
            .filter(|slot| slot.trigger == StageTrigger::Always)
            .map(|slot| slot.stage)
    }

    /// Resolve the stage list for the given filter presence.
    #[must_use]
    pub fn stages_for(&self, has_filters: bool) -> Vec<Stage> {
        self.stages
            .iter()
            .filter(|slot| slot.is_active(has_filters))
            .map(|slot| slot.stage)
            .collect()
    }
}

const TRANSFER_SIGNATURES: &[PathSignature] = &[
    PathSignature::LocalS3,
    PathSignature::S3Local,
    PathSignature::S3S3,
];

const REMOTE_ONLY: &[PathSignature] = &[PathSignature::S3];

const TRANSFER_STAGES: &[StageSlot] = &[
    StageSlot::always(Stage::FileGenerator),
    StageSlot::with_filters(Stage::Filters),
    StageSlot::always(Stage::FileInfoBuilder),
    StageSlot::always(Stage::S3Handler),
];

const SYNC_STAGES: &[StageSlot] = &[
    StageSlot::always(Stage::FileGenerator),
    StageSlot::with_filters(Stage::Filters),
    StageSlot::always(Stage::Comparator),
    StageSlot::always(Stage::FileInfoBuilder),
    StageSlot::always(Stage::S3Handler),
];

const BUCKET_STAGES: &[StageSlot] = &[StageSlot::always(Stage::S3Handler)];

static CP: CommandSpec = CommandSpec {
    command: S3Command::Cp,
    allowed_path_signatures: TRANSFER_SIGNATURES,
    stages: TRANSFER_STAGES,
    forces_dir_op: false,
};

static MV: CommandSpec = CommandSpec {
    command: S3Command::Mv,
    allowed_path_signatures: TRANSFER_SIGNATURES,
    stages: TRANSFER_STAGES,
    forces_dir_op: false,
};

static RM: CommandSpec = CommandSpec {
    command: S3Command::Rm,
    allowed_path_signatures: REMOTE_ONLY,
    stages: TRANSFER_STAGES,
    forces_dir_op: false,
};

static SYNC: CommandSpec = CommandSpec {
    command: S3Command::Sync,
    allowed_path_signatures: TRANSFER_SIGNATURES,
    stages: SYNC_STAGES,
    forces_dir_op: true,
};

static MB: CommandSpec = CommandSpec {
    command: S3Command::Mb,
    allowed_path_signatures: REMOTE_ONLY,
    stages: BUCKET_STAGES,
    forces_dir_op: true,
};

static RB: CommandSpec = CommandSpec {
    command: S3Command::Rb,
    allowed_path_signatures: REMOTE_ONLY,
    stages: BUCKET_STAGES,
    forces_dir_op: true,
};

// Listing is answered by a single direct request, not the transfer pipeline.
static LS: CommandSpec = CommandSpec {
    command: S3Command::Ls,
    allowed_path_signatures: REMOTE_ONLY,
    stages: &[],
    forces_dir_op: false,
};
