//! EMR error variants and their message templates.
//!
//! [`EmrError`] is a flat enum with one variant per failure condition. The
//! message of each variant is its `#[error]` template, so rendering is a
//! single exhaustive match generated by `thiserror`. [`EmrErrorKind`] is the
//! field-less tag of a variant, used when the kind is chosen at runtime.

use std::fmt;
use std::str::FromStr;

use crate::catalog::CatalogError;
use crate::constants::{AMI_VERSIONS_DOC_URL, APPLICATIONS, SSH_SETUP_DOC_URL};

/// EMR command error.
///
/// Messages prefixed with `aws: error:` are argument errors reported before
/// any request is sent; the others describe the state of a cluster or of
/// the local environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmrError {
    // -----------------------------------------------------------------------
    // Argument errors
    // -----------------------------------------------------------------------
    /// One or more required parameters were not supplied.
    #[error(
        "aws: error: The following required parameters are missing for {object_name}: {}.",
        .missing.join(", ")
    )]
    MissingParameters {
        /// The operation or parameter that has missing parameters.
        object_name: String,
        /// The names of the missing parameters.
        missing: Vec<String>,
    },

    /// None of `--instance-groups`, `--instance-type`, `--instance-count` were supplied.
    #[error(
        "aws: error: Must specify either --instance-groups or --instance-type with \
         --instance-count(optional) to configure instance groups."
    )]
    MissingRequiredInstanceGroups,

    /// `--instance-type`/`--instance-count` were combined with `--instance-groups`.
    #[error(
        "aws: error: You may not specify --instance-type or --instance-count with \
         --instance-groups, because --instance-type and --instance-count are shortcut \
         options for --instance-groups."
    )]
    InstanceGroupsValidation,

    /// The supplied AMI version is not supported.
    #[error(
        "aws: error: The supplied AMI version \"{ami_version}\" is invalid. Please see AMI \
         Versions Supported in Amazon EMR in Amazon Elastic MapReduce Developer Guide: {url}",
        url = AMI_VERSIONS_DOC_URL
    )]
    InvalidAmiVersion {
        /// The AMI version provided.
        ami_version: String,
    },

    /// Neither option of a required boolean pair was supplied.
    #[error(
        "aws: error: Must specify one of the following boolean options: \
         {true_option}|{false_option}."
    )]
    MissingBooleanOptions {
        /// The option that sets the value to true.
        true_option: String,
        /// The option that sets the value to false.
        false_option: String,
    },

    /// The step type is not supported.
    #[error("aws: error: The step type {step_type} is not supported.")]
    UnknownStepType {
        /// The step type provided.
        step_type: String,
    },

    /// The application name is not supported.
    #[error(
        "aws: error: The application name {app_name} is not supported. \"Name\" should be \
         one of the following: {supported}.",
        supported = APPLICATIONS.join(", ")
    )]
    UnknownApplication {
        /// The application name provided.
        app_name: String,
    },

    /// Debugging was enabled without a log URI.
    #[error(
        "aws: error: LogUri not specified. You must specify a logUri if you enable \
         debugging when creating a cluster."
    )]
    LogUri,

    /// `SubnetId` and `AvailabilityZone` were both given in `--ec2-attributes`.
    #[error(
        "aws: error: You may not specify both a SubnetId and an AvailabilityZone \
         (placement) because ec2SubnetId implies a placement."
    )]
    SubnetAndAzValidation,

    /// Some steps need applications that the cluster will not install.
    #[error(
        "aws: error: Some of the steps require the following applications to be installed: \
         {}. Please install the applications using --applications.",
        .applications.join(", ")
    )]
    MissingApplications {
        /// The applications the steps require.
        applications: Vec<String>,
    },

    /// More than one cluster state filter was given to `list-clusters`.
    #[error(
        "aws: error: You can specify only one of the cluster state filters: \
         --cluster-states, --active, --terminated, --failed."
    )]
    ClusterStatesFilterValidation,

    // -----------------------------------------------------------------------
    // Endpoint resolution errors
    // -----------------------------------------------------------------------
    /// No IAM endpoint is known for the region.
    #[error(
        "IAM endpoint not known for region: {region}. Specify the iam-endpoint using the \
         --iam-endpoint option."
    )]
    UnknownIamEndpoint {
        /// The region specified.
        region: String,
    },

    /// The service principal could not be derived from the region or endpoint.
    #[error("Could not resolve the service principal from the region or the endpoint.")]
    ResolveServicePrincipal,

    // -----------------------------------------------------------------------
    // Cluster state errors
    // -----------------------------------------------------------------------
    /// The master node has no public DNS name yet.
    #[error(
        "Cannot get Public DNS of master node on the cluster.  Please try again after some time."
    )]
    MasterDnsNotAvailable,

    /// The cluster is terminating or already terminated.
    #[error("aws: error: Cluster terminating or already terminated.")]
    ClusterTerminated,

    // -----------------------------------------------------------------------
    // Local tooling errors
    // -----------------------------------------------------------------------
    /// A non-ppk key file was passed to Putty.
    #[error(
        "Key file file format is incorrect. Putty expects a ppk file. Please refer to \
         documentation at {url}.",
        url = SSH_SETUP_DOC_URL
    )]
    WrongPuttyKey,

    /// A non-pem key file was passed to SSH.
    #[error(
        "Key file file format is incorrect. SSH expects a cer or pem file. Please refer to \
         documentation at {url}",
        url = SSH_SETUP_DOC_URL
    )]
    WrongSshKey,

    /// Neither `ssh` nor `putty` is available.
    #[error("SSH or Putty not available. Please refer to the documentation at {url}.", url = SSH_SETUP_DOC_URL)]
    SshNotFound,

    /// Neither `scp` nor `pscp` is available.
    #[error("SCP or Pscp not available. Please refer to the documentation at {url}.", url = SSH_SETUP_DOC_URL)]
    ScpNotFound,
}

impl EmrError {
    /// Render the final user-facing message.
    ///
    /// Equivalent to `to_string()`.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// The kind tag of this error.
    #[must_use]
    pub fn kind(&self) -> EmrErrorKind {
        match self {
            Self::MissingParameters { .. } => EmrErrorKind::MissingParameters,
            Self::MissingRequiredInstanceGroups => EmrErrorKind::MissingRequiredInstanceGroups,
            Self::InstanceGroupsValidation => EmrErrorKind::InstanceGroupsValidation,
            Self::InvalidAmiVersion { .. } => EmrErrorKind::InvalidAmiVersion,
            Self::MissingBooleanOptions { .. } => EmrErrorKind::MissingBooleanOptions,
            Self::UnknownStepType { .. } => EmrErrorKind::UnknownStepType,
            Self::UnknownApplication { .. } => EmrErrorKind::UnknownApplication,
            Self::LogUri => EmrErrorKind::LogUri,
            Self::SubnetAndAzValidation => EmrErrorKind::SubnetAndAzValidation,
            Self::MissingApplications { .. } => EmrErrorKind::MissingApplications,
            Self::ClusterStatesFilterValidation => EmrErrorKind::ClusterStatesFilterValidation,
            Self::UnknownIamEndpoint { .. } => EmrErrorKind::UnknownIamEndpoint,
            Self::ResolveServicePrincipal => EmrErrorKind::ResolveServicePrincipal,
            Self::MasterDnsNotAvailable => EmrErrorKind::MasterDnsNotAvailable,
            Self::ClusterTerminated => EmrErrorKind::ClusterTerminated,
            Self::WrongPuttyKey => EmrErrorKind::WrongPuttyKey,
            Self::WrongSshKey => EmrErrorKind::WrongSshKey,
            Self::SshNotFound => EmrErrorKind::SshNotFound,
            Self::ScpNotFound => EmrErrorKind::ScpNotFound,
        }
    }
}

/// Field-less tag identifying an [`EmrError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum EmrErrorKind {
    MissingParameters,
    MissingRequiredInstanceGroups,
    InstanceGroupsValidation,
    InvalidAmiVersion,
    MissingBooleanOptions,
    UnknownStepType,
    UnknownApplication,
    LogUri,
    SubnetAndAzValidation,
    MissingApplications,
    ClusterStatesFilterValidation,
    UnknownIamEndpoint,
    ResolveServicePrincipal,
    MasterDnsNotAvailable,
    ClusterTerminated,
    WrongPuttyKey,
    WrongSshKey,
    SshNotFound,
    ScpNotFound,
}

impl EmrErrorKind {
    /// Every kind in the catalog.
    pub const ALL: [Self; 19] = [
        Self::MissingParameters,
        Self::MissingRequiredInstanceGroups,
        Self::InstanceGroupsValidation,
        Self::InvalidAmiVersion,
        Self::MissingBooleanOptions,
        Self::UnknownStepType,
        Self::UnknownApplication,
        Self::LogUri,
        Self::SubnetAndAzValidation,
        Self::MissingApplications,
        Self::ClusterStatesFilterValidation,
        Self::UnknownIamEndpoint,
        Self::ResolveServicePrincipal,
        Self::MasterDnsNotAvailable,
        Self::ClusterTerminated,
        Self::WrongPuttyKey,
        Self::WrongSshKey,
        Self::SshNotFound,
        Self::ScpNotFound,
    ];

    /// The catalog name of this kind, e.g. `MissingParametersError`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingParameters => "MissingParametersError",
            Self::MissingRequiredInstanceGroups => "MissingRequiredInstanceGroupsError",
            Self::InstanceGroupsValidation => "InstanceGroupsValidationError",
            Self::InvalidAmiVersion => "InvalidAmiVersionError",
            Self::MissingBooleanOptions => "MissingBooleanOptionsError",
            Self::UnknownStepType => "UnknownStepTypeError",
            Self::UnknownApplication => "UnknownApplicationError",
            Self::LogUri => "LogUriError",
            Self::SubnetAndAzValidation => "SubnetAndAzValidationError",
            Self::MissingApplications => "MissingApplicationsError",
            Self::ClusterStatesFilterValidation => "ClusterStatesFilterValidationError",
            Self::UnknownIamEndpoint => "UnknownIamEndpointError",
            Self::ResolveServicePrincipal => "ResolveServicePrincipalError",
            Self::MasterDnsNotAvailable => "MasterDNSNotAvailableError",
            Self::ClusterTerminated => "ClusterTerminatedError",
            Self::WrongPuttyKey => "WrongPuttyKeyError",
            Self::WrongSshKey => "WrongSSHKeyError",
            Self::SshNotFound => "SSHNotFoundError",
            Self::ScpNotFound => "SCPNotFoundError",
        }
    }

    /// Names of the values the message template of this kind references.
    #[must_use]
    pub fn required_params(self) -> &'static [&'static str] {
        match self {
            Self::MissingParameters => &["object_name", "missing"],
            Self::InvalidAmiVersion => &["ami_version"],
            Self::MissingBooleanOptions => &["true_option", "false_option"],
            Self::UnknownStepType => &["step_type"],
            Self::UnknownApplication => &["app_name"],
            Self::MissingApplications => &["applications"],
            Self::UnknownIamEndpoint => &["region"],
            Self::MissingRequiredInstanceGroups
            | Self::InstanceGroupsValidation
            | Self::LogUri
            | Self::SubnetAndAzValidation
            | Self::ClusterStatesFilterValidation
            | Self::ResolveServicePrincipal
            | Self::MasterDnsNotAvailable
            | Self::ClusterTerminated
            | Self::WrongPuttyKey
            | Self::WrongSshKey
            | Self::SshNotFound
            | Self::ScpNotFound => &[],
        }
    }
}

impl fmt::Display for EmrErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmrErrorKind {
    type Err = CatalogError;

    /// Parse a catalog name. The trailing `Error` suffix is optional and
    /// the comparison ignores ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| {
                let name = kind.as_str();
                name.eq_ignore_ascii_case(wanted)
                    || name
                        .strip_suffix("Error")
                        .is_some_and(|short| short.eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| CatalogError::UnknownKind(wanted.to_owned()))
    }
}
