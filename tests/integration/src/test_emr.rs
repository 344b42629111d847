//! EMR catalog rendering through the public API.

#[cfg(test)]
mod tests {
    use awsctl_emr::constants::APPLICATIONS;
    use awsctl_emr::{CatalogError, EmrError, EmrErrorKind, ErrorParams};

    fn params_for(kind: EmrErrorKind) -> ErrorParams {
        kind.required_params()
            .iter()
            .fold(ErrorParams::new(), |params, name| params.with(*name, "value"))
    }

    #[test]
    fn test_should_render_every_kind_from_its_required_params() {
        for kind in EmrErrorKind::ALL {
            let err = EmrError::from_params(kind, &params_for(kind)).unwrap();
            assert_eq!(err.kind(), kind);
            let msg = err.render();
            assert!(!msg.is_empty(), "{kind}");
            assert!(!msg.contains('{'), "{kind}: {msg}");
        }
    }

    #[test]
    fn test_should_fail_instead_of_leaving_blanks() {
        for kind in EmrErrorKind::ALL {
            for name in kind.required_params() {
                let mut params = ErrorParams::new();
                for other in kind.required_params().iter().filter(|n| *n != name) {
                    params.insert(*other, "value");
                }
                assert_eq!(
                    EmrError::from_params(kind, &params),
                    Err(CatalogError::MissingParameter { kind, name: *name })
                );
            }
        }
    }

    #[test]
    fn test_should_resolve_kind_names_case_insensitively() {
        for kind in EmrErrorKind::ALL {
            assert_eq!(kind.as_str().parse::<EmrErrorKind>().unwrap(), kind);
            let short = kind.as_str().trim_end_matches("Error").to_ascii_lowercase();
            assert_eq!(short.parse::<EmrErrorKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_should_render_missing_applications_list() {
        let params = ErrorParams::new().with(
            "applications",
            vec!["Hive".to_owned(), "Pig".to_owned()],
        );
        let err = EmrError::from_params(EmrErrorKind::MissingApplications, &params).unwrap();
        assert_eq!(
            err.render(),
            "aws: error: Some of the steps require the following applications to be installed: \
             Hive, Pig. Please install the applications using --applications."
        );
    }

    #[test]
    fn test_should_list_supported_applications() {
        let err = EmrError::UnknownApplication {
            app_name: "Spark".to_owned(),
        };
        let msg = err.render();
        for app in APPLICATIONS {
            assert!(msg.contains(app), "{app}");
        }
    }

    #[test]
    fn test_should_render_iam_endpoint_region() {
        let err = EmrError::from_params(
            EmrErrorKind::UnknownIamEndpoint,
            &ErrorParams::new().with("region", "us-gov-west-1"),
        )
        .unwrap();
        assert_eq!(
            err.to_string(),
            "IAM endpoint not known for region: us-gov-west-1. Specify the iam-endpoint using \
             the --iam-endpoint option."
        );
    }
}
