//! CloudTrail event names recorded by AWS Secrets Manager.

pub const CREATE_SECRET: &str = "CreateSecret";
pub const GET_SECRET_VALUE: &str = "GetSecretValue";
pub const PUT_SECRET_VALUE: &str = "PutSecretValue";
pub const UPDATE_SECRET: &str = "UpdateSecret";
pub const ROTATE_SECRET: &str = "RotateSecret";

/// Event names the collector queries. Only read events matter for
/// consumer attribution today; the write events above are kept for the
/// collectors that will need them.
pub const SUPPORTED: &[&str] = &[GET_SECRET_VALUE];
