//! Runtime construction of catalog entries from named values.

use std::collections::BTreeMap;

use crate::error::{EmrError, EmrErrorKind};

/// Failure to build an [`EmrError`] from runtime input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The name does not identify any catalog entry.
    #[error("unknown EMR error kind: {0}")]
    UnknownKind(String),

    /// A value referenced by the message template was not supplied.
    #[error("{kind} requires a value for '{name}'")]
    MissingParameter {
        /// The kind being constructed.
        kind: EmrErrorKind,
        /// The name of the absent value.
        name: &'static str,
    },
}

/// A named value substituted into a message template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// A single value.
    Text(String),
    /// A sequence of values, joined with `", "` when rendered.
    List(Vec<String>),
}

impl ParamValue {
    fn to_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::List(items) => items.join(", "),
        }
    }

    fn to_list(&self) -> Vec<String> {
        match self {
            Self::Text(s) => vec![s.clone()],
            Self::List(items) => items.clone(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<&[&str]> for ParamValue {
    fn from(value: &[&str]) -> Self {
        Self::List(value.iter().map(|s| (*s).to_owned()).collect())
    }
}

/// Named values available to a message template.
///
/// Values the chosen kind does not reference are ignored.
///
/// ```
/// use awsctl_emr::{EmrError, EmrErrorKind, ErrorParams};
///
/// let params = ErrorParams::new()
///     .with("object_name", "create-cluster")
///     .with("missing", &["--ami-version"][..]);
/// let err = EmrError::from_params(EmrErrorKind::MissingParameters, &params).unwrap();
/// assert!(err.render().contains("create-cluster: --ami-version"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorParams {
    values: BTreeMap<String, ParamValue>,
}

impl ErrorParams {
    /// Create an empty set of values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, replacing any previous value with the same name.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert a value, replacing any previous value with the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Look up a value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    /// Whether no values have been supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

struct Lookup<'a> {
    kind: EmrErrorKind,
    params: &'a ErrorParams,
}

impl Lookup<'_> {
    fn value(&self, name: &'static str) -> Result<&ParamValue, CatalogError> {
        self.params
            .get(name)
            .ok_or(CatalogError::MissingParameter {
                kind: self.kind,
                name,
            })
    }

    fn text(&self, name: &'static str) -> Result<String, CatalogError> {
        self.value(name).map(ParamValue::to_text)
    }

    fn list(&self, name: &'static str) -> Result<Vec<String>, CatalogError> {
        self.value(name).map(ParamValue::to_list)
    }
}

impl EmrError {
    /// Build the entry for `kind` from named values.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingParameter`] naming the first value the
    /// template of `kind` references but `params` does not contain.
    pub fn from_params(kind: EmrErrorKind, params: &ErrorParams) -> Result<Self, CatalogError> {
        let p = Lookup { kind, params };
        let err = match kind {
            EmrErrorKind::MissingParameters => Self::MissingParameters {
                object_name: p.text("object_name")?,
                missing: p.list("missing")?,
            },
            EmrErrorKind::MissingRequiredInstanceGroups => Self::MissingRequiredInstanceGroups,
            EmrErrorKind::InstanceGroupsValidation => Self::InstanceGroupsValidation,
            EmrErrorKind::InvalidAmiVersion => Self::InvalidAmiVersion {
                ami_version: p.text("ami_version")?,
            },
            EmrErrorKind::MissingBooleanOptions => Self::MissingBooleanOptions {
                true_option: p.text("true_option")?,
                false_option: p.text("false_option")?,
            },
            EmrErrorKind::UnknownStepType => Self::UnknownStepType {
                step_type: p.text("step_type")?,
            },
            EmrErrorKind::UnknownApplication => Self::UnknownApplication {
                app_name: p.text("app_name")?,
            },
            EmrErrorKind::LogUri => Self::LogUri,
            EmrErrorKind::SubnetAndAzValidation => Self::SubnetAndAzValidation,
            EmrErrorKind::MissingApplications => Self::MissingApplications {
                applications: p.list("applications")?,
            },
            EmrErrorKind::ClusterStatesFilterValidation => Self::ClusterStatesFilterValidation,
            EmrErrorKind::UnknownIamEndpoint => Self::UnknownIamEndpoint {
                region: p.text("region")?,
            },
            EmrErrorKind::ResolveServicePrincipal => Self::ResolveServicePrincipal,
            EmrErrorKind::MasterDnsNotAvailable => Self::MasterDnsNotAvailable,
            EmrErrorKind::ClusterTerminated => Self::ClusterTerminated,
            EmrErrorKind::WrongPuttyKey => Self::WrongPuttyKey,
            EmrErrorKind::WrongSshKey => Self::WrongSshKey,
            EmrErrorKind::SshNotFound => Self::SshNotFound,
            EmrErrorKind::ScpNotFound => Self::ScpNotFound,
        };
        Ok(err)
    }
}
