//! awsctl - EMR error catalog and S3 command planner.
//!
//! Validates the path arguments of the high-level S3 commands and prints the
//! execution plan a transfer engine would run, and renders the user-facing
//! messages of the EMR error catalog.
//!
//! # Usage
//!
//! ```text
//! awsctl s3 sync ./site s3://my-bucket/site --exclude '*.tmp' --dryrun
//! awsctl emr render UnknownApplication --param app_name=Spark
//! awsctl emr kinds
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `AWS_REGION` / `AWS_DEFAULT_REGION` | *(unset)* | Region when `--region` is absent |
//! | `AWS_ENDPOINT_URL` | *(unset)* | Endpoint when `--endpoint-url` is absent |
//! | `AWSCTL_VERIFY_SSL` | `true` | Verify TLS certificates by default |
//! | `AWSCTL_OUTPUT` | `json` | Output format (`json` or `text`) |
//! | `LOG_LEVEL` | `warn` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod cli;

use std::process::ExitCode;

use anyhow::{Context, Result};
use awsctl_core::{CliConfig, OutputFormat};
use awsctl_emr::{EmrError, EmrErrorKind};
use awsctl_s3::{CommandParameters, ExecutionPlan, Stage};
use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, EmrCommand, S3Args, Service, error_params, ordered_filters};

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
/// Events go to stderr so they never mix with command output.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn run_s3(args: &S3Args, matches: &ArgMatches, config: &CliConfig) -> Result<()> {
    let options = args.options(ordered_filters(matches));
    let parameters = CommandParameters::new(args.command, args.paths().as_slice(), options)?;
    parameters.check_local_source()?;

    let plan = ExecutionPlan::build(parameters, config)?;
    debug!(command = %plan.command, stages = plan.stages.len(), "planned s3 command");

    match config.output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&plan).context("failed to serialize plan")?;
            println!("{json}");
        }
        OutputFormat::Text => print_plan_text(&plan),
    }
    Ok(())
}

fn print_plan_text(plan: &ExecutionPlan) {
    for step in &plan.pre_steps {
        print_plan_text(step);
    }
    if let Some(preview) = &plan.dry_run_preview {
        println!("{preview}");
        return;
    }
    let stages: Vec<&str> = plan.stages.iter().copied().map(Stage::as_str).collect();
    println!(
        "{} {} ({}): {}",
        plan.command,
        plan.paths_type,
        plan.operation,
        stages.join(" -> ")
    );
}

fn run_emr(command: &EmrCommand, config: &CliConfig) -> Result<()> {
    match command {
        EmrCommand::Render { kind, params } => {
            let err = EmrError::from_params(*kind, &error_params(params))?;
            match config.output {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({ "kind": kind.as_str(), "message": err.render() })
                ),
                OutputFormat::Text => println!("{err}"),
            }
        }
        EmrCommand::Kinds => match config.output {
            OutputFormat::Json => {
                let kinds: Vec<_> = EmrErrorKind::ALL
                    .iter()
                    .map(|kind| {
                        serde_json::json!({
                            "kind": kind.as_str(),
                            "required": kind.required_params(),
                        })
                    })
                    .collect();
                let json =
                    serde_json::to_string_pretty(&kinds).context("failed to serialize kinds")?;
                println!("{json}");
            }
            OutputFormat::Text => {
                for kind in EmrErrorKind::ALL {
                    println!("{kind}: {}", kind.required_params().join(", "));
                }
            }
        },
    }
    Ok(())
}

fn run(cli: &Cli, matches: &ArgMatches) -> Result<()> {
    let mut config = CliConfig::from_env().context("invalid environment configuration")?;
    if let Some(output) = cli.output {
        config.output = output;
    }

    init_tracing(&config.log_level)?;

    match &cli.service {
        Service::S3(args) => {
            let s3_matches = matches
                .subcommand_matches("s3")
                .context("missing s3 arguments")?;
            run_s3(args, s3_matches, &config)
        }
        Service::Emr(command) => run_emr(command, &config),
    }
}

fn main() -> ExitCode {
    let matches = Cli::command().get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    match run(&cli, &matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "command failed");
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
