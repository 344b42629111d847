//! Constants referenced by EMR error messages.

/// Application names accepted by `--applications`.
pub const APPLICATIONS: [&str; 9] = [
    "HIVE", "PIG", "HBASE", "GANGLIA", "IMPALA", "MAPR", "MAPR_M3", "MAPR_M5", "MAPR_M7",
];

/// Developer guide page describing supported AMI versions.
pub const AMI_VERSIONS_DOC_URL: &str =
    "http://docs.aws.amazon.com/ElasticMapReduce/latest/DeveloperGuide/ami-versions-supported.html";

/// Developer guide page describing SSH access to cluster nodes.
pub const SSH_SETUP_DOC_URL: &str =
    "http://docs.aws.amazon.com/ElasticMapReduce/latest/DeveloperGuide/EMR_SetUp_SSH.html";
