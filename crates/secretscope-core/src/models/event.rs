//! Canonical audit events, normalized from CloudTrail `LookupEvents` output.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::identity::UserIdentity;

/// Events grouped by CloudTrail event name (see [`crate::secret_events`]).
pub type EventsByName = HashMap<String, Vec<AuditEvent>>;

/// A resource reference attached to an audit event.
///
/// `resource_name` may be a bare secret name or a fully qualified ARN,
/// depending on how the Secrets Manager action was invoked. Events may
/// carry any number of resources.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventResource {
    pub resource_type: String,
    pub resource_name: String,
}

/// One recorded API call against the secrets vault.
///
/// Immutable once normalized. `external_id` is unique within a fetch
/// session; `event_time` is always present (events without a timestamp are
/// rejected during normalization).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    pub external_id: String,
    pub event_name: String,
    pub event_source: String,
    pub event_time: jiff::Timestamp,
    /// Username from the event envelope; may be empty.
    pub username: String,
    pub resources: Vec<EventResource>,
    pub user_identity: UserIdentity,
    pub source_ip_address: String,
    pub user_agent: String,
    /// Opaque request payload, re-serialized as canonical JSON.
    pub request_parameters: String,
    /// Opaque response payload, re-serialized as canonical JSON.
    pub response_elements: String,
    pub event_category: String,
}
