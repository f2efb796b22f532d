//! Consumers: distinct identities observed reading a secret.

use serde::{Deserialize, Serialize};

/// Whether a consumer is a person or an automated actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsumerCategory {
    Human,
    Machine,
}

/// One distinct identity that read the secret during the analysis window.
///
/// Built transiently per matching event, then merged last-write-wins on
/// `external_id` so each consumer carries its most recent access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consumer {
    pub category: ConsumerCategory,
    /// Human-readable identity type, e.g. "AWS IAM User".
    pub kind: String,
    pub name: String,
    /// Stable identifier used for deduplication: the raw principal id, or
    /// for role-backed identities the resolved session entity id.
    pub external_id: String,
    /// Identity ARN, informational.
    pub external_resource_name: String,
    /// May be empty when the identity carried no access key.
    pub access_key_id: String,
    pub accessed_resource_at: jiff::Timestamp,
}
