//! Full command × path-signature acceptance table.

#[cfg(test)]
mod tests {
    use awsctl_s3::planner::validate_path_signature;
    use awsctl_s3::{CommandOptions, CommandParameters, PathSignature, S3Command, S3CommandError};

    use crate::{init_tracing, paths_for};

    fn allowed(command: S3Command) -> &'static [PathSignature] {
        match command {
            S3Command::Cp | S3Command::Mv | S3Command::Sync => &[
                PathSignature::LocalS3,
                PathSignature::S3S3,
                PathSignature::S3Local,
            ],
            S3Command::Rm | S3Command::Mb | S3Command::Rb | S3Command::Ls => &[PathSignature::S3],
        }
    }

    #[test]
    fn test_should_accept_exactly_the_allowed_signatures() {
        init_tracing();
        for command in S3Command::ALL {
            for signature in PathSignature::ALL {
                let paths = paths_for(signature);
                let result = validate_path_signature(command, paths.as_slice());
                if allowed(command).contains(&signature) {
                    assert_eq!(result.unwrap(), signature, "{command} {signature}");
                } else {
                    assert!(
                        matches!(
                            result,
                            Err(S3CommandError::InvalidPathType { command: c, signature: s })
                                if c == command && s == signature
                        ),
                        "{command} {signature} should be rejected"
                    );
                }
            }
        }
    }

    #[test]
    fn test_should_reject_every_two_path_form_for_ls() {
        init_tracing();
        for signature in [
            PathSignature::Local,
            PathSignature::LocalLocal,
            PathSignature::S3S3,
            PathSignature::LocalS3,
            PathSignature::S3Local,
        ] {
            let err = validate_path_signature(S3Command::Ls, paths_for(signature).as_slice()).unwrap_err();
            let msg = err.to_string();
            assert!(msg.contains(signature.as_str()), "{msg}");
            assert!(msg.contains("ls"), "{msg}");
        }
    }

    #[test]
    fn test_should_reject_same_inputs_through_parameters() {
        init_tracing();
        for command in S3Command::ALL {
            for signature in PathSignature::ALL {
                let paths = paths_for(signature);
                let direct = validate_path_signature(command, paths.as_slice()).is_ok();
                let assembled =
                    CommandParameters::new(command, paths.as_slice(), CommandOptions::default()).is_ok();
                assert_eq!(direct, assembled, "{command} {signature}");
            }
        }
    }

    #[test]
    fn test_should_parse_every_command_from_its_name() {
        for command in S3Command::ALL {
            assert_eq!(command.as_str().parse::<S3Command>().unwrap(), command);
        }
    }
}
