//! Command-line definitions.

use std::collections::BTreeMap;
use std::str::FromStr;

use awsctl_core::{AwsRegion, CoreError, OutputFormat};
use awsctl_emr::{CatalogError, EmrErrorKind, ErrorParams, ParamValue};
use awsctl_s3::path::S3_SCHEME;
use awsctl_s3::{CommandOptions, Filter, S3Command, S3CommandError};
use clap::{ArgMatches, Args, Parser, Subcommand};

/// Plan S3 transfer commands and render EMR error messages.
#[derive(Debug, Parser)]
#[command(name = "awsctl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format (overrides `AWSCTL_OUTPUT`)
    #[arg(long, global = true, value_parser = parse_output)]
    pub output: Option<OutputFormat>,

    /// Service to operate on
    #[command(subcommand)]
    pub service: Service,
}

/// Top-level service commands.
#[derive(Debug, Subcommand)]
pub enum Service {
    /// Validate an S3 command line and print its execution plan
    S3(S3Args),
    /// EMR error catalog
    #[command(subcommand)]
    Emr(EmrCommand),
}

/// Arguments of `awsctl s3`.
#[derive(Debug, Args)]
pub struct S3Args {
    /// One of cp, mv, rm, sync, mb, rb, ls
    #[arg(value_parser = parse_command)]
    pub command: S3Command,

    /// Source and optional destination (local path or s3://bucket/key); `ls` defaults to s3://
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Operate on all files or objects under the given directory or prefix
    #[arg(long)]
    pub recursive: bool,

    /// Show what would be done without doing it
    #[arg(long)]
    pub dryrun: bool,

    /// Suppress per-file output
    #[arg(long)]
    pub quiet: bool,

    /// Include files matching the pattern
    #[arg(long, value_name = "PATTERN")]
    pub include: Vec<String>,

    /// Exclude files matching the pattern
    #[arg(long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Do not follow symbolic links
    #[arg(long)]
    pub no_follow_symlinks: bool,

    /// Delete all objects before removing the bucket (rb only)
    #[arg(long)]
    pub force: bool,

    /// Region of the destination bucket
    #[arg(long, value_parser = parse_region)]
    pub region: Option<AwsRegion>,

    /// Endpoint URL override
    #[arg(long, value_name = "URL")]
    pub endpoint_url: Option<String>,

    /// Do not verify TLS certificates
    #[arg(long)]
    pub no_verify_ssl: bool,

    /// Region of the source bucket for bucket-to-bucket transfers
    #[arg(long, value_parser = parse_region)]
    pub source_region: Option<AwsRegion>,
}

impl S3Args {
    /// The path arguments, with `ls` listing buckets when none is given.
    pub fn paths(&self) -> Vec<String> {
        if self.command == S3Command::Ls && self.paths.is_empty() {
            vec![S3_SCHEME.to_owned()]
        } else {
            self.paths.clone()
        }
    }

    /// Build the command options; `filters` must already be in command-line order.
    pub fn options(&self, filters: Vec<Filter>) -> CommandOptions {
        CommandOptions {
            dir_op: self.recursive,
            dryrun: self.dryrun,
            quiet: self.quiet,
            filters,
            follow_symlinks: !self.no_follow_symlinks,
            force: self.force,
            region: self.region.clone(),
            endpoint_url: self.endpoint_url.clone(),
            verify_ssl: self.no_verify_ssl.then_some(false),
            source_region: self.source_region.clone(),
        }
    }
}

/// Subcommands of `awsctl emr`.
#[derive(Debug, Subcommand)]
pub enum EmrCommand {
    /// Render one catalog entry
    Render {
        /// Catalog name, e.g. MissingParametersError (the Error suffix is optional)
        #[arg(value_parser = parse_kind)]
        kind: EmrErrorKind,

        /// Named value for the message; repeat a name to pass a list
        #[arg(long = "param", value_name = "NAME=VALUE", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// List every catalog entry and the values it requires
    Kinds,
}

/// Collect `--include` / `--exclude` values from `matches` in the order they were given.
pub fn ordered_filters(matches: &ArgMatches) -> Vec<Filter> {
    let mut indexed: Vec<(usize, Filter)> = Vec::new();
    let sources: [(&str, fn(String) -> Filter); 2] =
        [("include", Filter::Include), ("exclude", Filter::Exclude)];

    for (id, make) in sources {
        if let (Some(values), Some(indices)) =
            (matches.get_many::<String>(id), matches.indices_of(id))
        {
            indexed.extend(indices.zip(values.cloned().map(make)));
        }
    }

    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, filter)| filter).collect()
}

/// Group `NAME=VALUE` pairs into catalog parameters.
///
/// A name given once is a single value; a name given more than once becomes a list.
pub fn error_params(pairs: &[(String, String)]) -> ErrorParams {
    let mut grouped: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for (name, value) in pairs {
        grouped.entry(name.as_str()).or_default().push(value.clone());
    }

    let mut params = ErrorParams::new();
    for (name, mut values) in grouped {
        let value = if values.len() == 1 {
            ParamValue::Text(values.remove(0))
        } else {
            ParamValue::List(values)
        };
        params.insert(name, value);
    }
    params
}

fn parse_command(s: &str) -> Result<S3Command, S3CommandError> {
    S3Command::from_str(s)
}

fn parse_region(s: &str) -> Result<AwsRegion, CoreError> {
    AwsRegion::parse(s)
}

fn parse_output(s: &str) -> Result<OutputFormat, CoreError> {
    OutputFormat::from_str(s)
}

fn parse_kind(s: &str) -> Result<EmrErrorKind, CatalogError> {
    EmrErrorKind::from_str(s)
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_owned(), value.to_owned())),
        _ => Err(format!("expected NAME=VALUE, got {s:?}")),
    }
}
