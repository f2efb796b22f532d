//! Normalization of raw CloudTrail envelopes into canonical audit events.
//!
//! Each `LookupEvents` envelope carries the full event record as an
//! embedded JSON string (`cloud_trail_event`). The identity payload lives
//! only in that body, so a body that fails to parse fails the whole
//! collection rather than being dropped.

use serde::Deserialize;
use serde_json::Value;

use secretscope_core::{AuditEvent, EventResource, UserIdentity};

use crate::error::CollectorError;

/// The parsed shape of the embedded `cloud_trail_event` JSON body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawEventBody {
    user_identity: UserIdentity,
    resources: Option<Vec<EventResource>>,
    request_parameters: Option<Value>,
    response_elements: Option<Value>,
    event_category: String,
    // CloudTrail spells this with a capitalized "IP".
    #[serde(rename = "sourceIPAddress")]
    source_ip_address: String,
    user_agent: String,
}

/// Normalize one `LookupEvents` envelope into an [`AuditEvent`].
pub fn normalize_event(
    event: &aws_sdk_cloudtrail::types::Event,
) -> Result<AuditEvent, CollectorError> {
    let external_id = event
        .event_id()
        .ok_or_else(|| CollectorError::MalformedEvent("event without an id".to_string()))?;

    let body_json = event.cloud_trail_event().ok_or_else(|| {
        CollectorError::MalformedEvent(format!("event {external_id}: no embedded body"))
    })?;

    let body: RawEventBody = serde_json::from_str(body_json).map_err(|e| {
        CollectorError::MalformedEvent(format!("event {external_id}: {e}"))
    })?;

    let event_time = event
        .event_time()
        .ok_or_else(|| {
            CollectorError::MalformedEvent(format!("event {external_id}: no timestamp"))
        })
        .and_then(|dt| {
            jiff::Timestamp::from_millisecond(dt.to_millis().map_err(|e| {
                CollectorError::MalformedEvent(format!("event {external_id}: {e}"))
            })?)
            .map_err(|e| CollectorError::MalformedEvent(format!("event {external_id}: {e}")))
        })?;

    Ok(AuditEvent {
        external_id: external_id.to_string(),
        event_name: event.event_name().unwrap_or_default().to_string(),
        event_source: event.event_source().unwrap_or_default().to_string(),
        event_time,
        username: event.username().unwrap_or_default().to_string(),
        resources: reconcile_resources(event.resources(), body.resources),
        user_identity: body.user_identity,
        source_ip_address: body.source_ip_address,
        user_agent: body.user_agent,
        request_parameters: serde_json::to_string(&body.request_parameters.unwrap_or(Value::Null))?,
        response_elements: serde_json::to_string(&body.response_elements.unwrap_or(Value::Null))?,
        event_category: body.event_category,
    })
}

/// CloudTrail is inconsistent about where resources appear: sometimes on
/// the envelope, sometimes in the parsed body. The body list wins when it
/// is present and non-empty; otherwise the envelope list is used. The two
/// are never merged, which would duplicate entries when both are set.
fn reconcile_resources(
    envelope: &[aws_sdk_cloudtrail::types::Resource],
    body: Option<Vec<EventResource>>,
) -> Vec<EventResource> {
    match body {
        Some(resources) if !resources.is_empty() => resources,
        _ => envelope
            .iter()
            .map(|resource| EventResource {
                resource_type: resource.resource_type().unwrap_or_default().to_string(),
                resource_name: resource.resource_name().unwrap_or_default().to_string(),
            })
            .collect(),
    }
}
