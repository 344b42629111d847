//! Execution plans built end to end from command-line shaped input.

#[cfg(test)]
mod tests {
    use std::fs;

    use awsctl_core::{AwsRegion, CliConfig};
    use awsctl_s3::planner::plan;
    use awsctl_s3::{
        CommandOptions, CommandParameters, ExecutionPlan, Filter, ListRequest, PathSignature,
        S3Command, S3CommandError, Stage, TransferOperation,
    };

    use crate::{S3_FILE, init_tracing, paths_for};

    fn filtered() -> CommandOptions {
        CommandOptions::builder()
            .filters(vec![Filter::Exclude("*.tmp".to_owned())])
            .build()
    }

    #[test]
    fn test_should_match_documented_pipelines() {
        init_tracing();
        let transfer = [Stage::FileGenerator, Stage::FileInfoBuilder, Stage::S3Handler];
        let transfer_filtered = [
            Stage::FileGenerator,
            Stage::Filters,
            Stage::FileInfoBuilder,
            Stage::S3Handler,
        ];
        for cmd in [S3Command::Cp, S3Command::Mv, S3Command::Rm] {
            assert_eq!(plan(cmd, &CommandOptions::default()), transfer, "{cmd}");
            assert_eq!(plan(cmd, &filtered()), transfer_filtered, "{cmd}");
        }

        assert_eq!(
            plan(S3Command::Sync, &CommandOptions::default()),
            [
                Stage::FileGenerator,
                Stage::Comparator,
                Stage::FileInfoBuilder,
                Stage::S3Handler
            ]
        );
        assert_eq!(
            plan(S3Command::Mb, &CommandOptions::default()),
            plan(S3Command::Rb, &CommandOptions::default())
        );
        assert!(plan(S3Command::Ls, &filtered()).is_empty());
    }

    #[test]
    fn test_should_build_identical_plans_for_identical_input() {
        init_tracing();
        let config = CliConfig::default();
        for command in S3Command::ALL {
            for signature in PathSignature::ALL {
                let paths = paths_for(signature);
                let Ok(params) = CommandParameters::new(command, paths.as_slice(), filtered()) else {
                    continue;
                };
                let first = ExecutionPlan::build(params.clone(), &config).unwrap();
                let second = ExecutionPlan::build(params, &config).unwrap();
                assert_eq!(
                    serde_json::to_value(&first).unwrap(),
                    serde_json::to_value(&second).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_should_plan_sync_upload_of_real_directory() {
        init_tracing();
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), b"<html/>").unwrap();
        let src = dir.path().to_str().unwrap();

        let params = CommandParameters::new(
            S3Command::Sync,
            &[src, "s3://site-bucket/"],
            CommandOptions::builder()
                .filters(vec![
                    Filter::Exclude("*".to_owned()),
                    Filter::Include("*.html".to_owned()),
                ])
                .dryrun(true)
                .build(),
        )
        .unwrap();
        params.check_local_source().unwrap();

        let config = CliConfig::builder()
            .default_region(AwsRegion::new("eu-central-1"))
            .build();
        let plan = ExecutionPlan::build(params, &config).unwrap();

        assert_eq!(plan.operation, TransferOperation::Upload);
        assert!(plan.parameters.options.dir_op);
        assert_eq!(plan.stages[1], Stage::Filters);
        assert_eq!(
            plan.endpoints.endpoint.region,
            Some(AwsRegion::new("eu-central-1"))
        );
        assert_eq!(
            plan.dry_run_preview,
            Some(format!("(dryrun) upload: {src} to s3://site-bucket/"))
        );
    }

    #[test]
    fn test_should_plan_cross_region_copy() {
        init_tracing();
        let params = CommandParameters::new(
            S3Command::Cp,
            &["s3://source-bucket/key", S3_FILE],
            CommandOptions::builder()
                .region(AwsRegion::new("us-west-2"))
                .source_region(AwsRegion::new("eu-west-1"))
                .build(),
        )
        .unwrap();
        let plan = ExecutionPlan::build(params, &CliConfig::default()).unwrap();

        assert_eq!(plan.operation, TransferOperation::Copy);
        assert_eq!(plan.endpoints.endpoint.region, Some(AwsRegion::new("us-west-2")));
        assert_eq!(
            plan.endpoints.source_endpoint.region,
            Some(AwsRegion::new("eu-west-1"))
        );
    }

    #[test]
    fn test_should_purge_bucket_before_forced_removal() {
        init_tracing();
        let params = CommandParameters::new(
            S3Command::Rb,
            &["s3://old-bucket"],
            CommandOptions::builder().force(true).build(),
        )
        .unwrap();
        let plan = ExecutionPlan::build(params, &CliConfig::default()).unwrap();

        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["operation"], "remove_bucket");
        assert_eq!(json["pre_steps"][0]["command"], "rm");
        assert_eq!(json["pre_steps"][0]["parameters"]["src"], "s3://old-bucket");
        assert_eq!(json["pre_steps"][0]["parameters"]["dir_op"], true);
    }

    #[test]
    fn test_should_refuse_to_plan_without_bucket() {
        init_tracing();
        for (command, options) in [
            (S3Command::Rb, CommandOptions::builder().force(true).dryrun(true).build()),
            (S3Command::Mb, CommandOptions::builder().dryrun(true).build()),
            (S3Command::Rm, CommandOptions::builder().dir_op(true).build()),
        ] {
            assert!(
                matches!(
                    CommandParameters::new(command, &["s3://"], options.clone()),
                    Err(S3CommandError::MissingBucket { .. })
                ),
                "{command}"
            );

            let unchecked = CommandParameters {
                command,
                src: "s3://".to_owned(),
                dest: "s3://".to_owned(),
                paths_type: PathSignature::S3,
                options,
            };
            assert!(
                matches!(
                    ExecutionPlan::build(unchecked, &CliConfig::default()),
                    Err(S3CommandError::MissingBucket { .. })
                ),
                "{command}"
            );
        }
    }

    #[test]
    fn test_should_list_buckets_and_prefixes() {
        init_tracing();
        let buckets =
            CommandParameters::new(S3Command::Ls, &["s3://"], CommandOptions::default()).unwrap();
        let plan = ExecutionPlan::build(buckets, &CliConfig::default()).unwrap();
        assert_eq!(plan.list, Some(ListRequest::Buckets));

        let recursive = CommandParameters::new(
            S3Command::Ls,
            &["s3://mybucket/logs/"],
            CommandOptions::builder().dir_op(true).build(),
        )
        .unwrap();
        let plan = ExecutionPlan::build(recursive, &CliConfig::default()).unwrap();
        assert_eq!(
            plan.list,
            Some(ListRequest::Objects {
                bucket: "mybucket".to_owned(),
                prefix: "logs/".to_owned(),
                delimiter: None,
            })
        );
    }
}
