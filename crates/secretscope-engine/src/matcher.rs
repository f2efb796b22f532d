//! Matching audit-event resource references against a target secret.

use regex::Regex;

const SECRETSMANAGER_ARN_PREFIX: &str = "arn:aws:secretsmanager:";
const SECRET_SEGMENT: &str = "secret:";

/// Decide whether an event's resource name identifies the target secret.
///
/// A resource name comes back either as the bare secret name or as the
/// secret's ARN, depending on how the Secrets Manager action was invoked:
///
/// 1. Exact string equality matches.
/// 2. A Secrets Manager ARN matches when the identifier after its
///    `secret:` segment is exactly `<secret_id>-<version suffix>`, where
///    the suffix is one or more alphanumeric characters. The suffix is
///    required: an identifier that merely starts with `secret_id` must not
///    match, or one secret id being a prefix of another would produce
///    false positives.
/// 3. Anything else does not match.
pub fn resource_matches_secret(resource_name: &str, secret_id: &str) -> bool {
    if resource_name == secret_id {
        return true;
    }

    if resource_name.starts_with(SECRETSMANAGER_ARN_PREFIX) {
        if let Some(secret_index) = resource_name.find(SECRET_SEGMENT) {
            let identifier = &resource_name[secret_index + SECRET_SEGMENT.len()..];
            // Escape the secret id: user-supplied ids may contain regex
            // metacharacters and must be matched literally.
            let pattern = format!("^{}-[a-zA-Z0-9]+$", regex::escape(secret_id));
            return match Regex::new(&pattern) {
                Ok(re) => re.is_match(identifier),
                Err(_) => false,
            };
        }
    }

    false
}
