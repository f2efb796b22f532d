//! One-pass consumer attribution: filter events by secret, classify each
//! actor, keep the most recent access per distinct identity.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use secretscope_core::{secret_events, AuditEvent, Consumer, EventsByName, UserIdentity};
use tracing::warn;

use crate::classifier::{classify, resolved_entity_id};
use crate::error::EngineError;
use crate::matcher::resource_matches_secret;

/// Attribute read access for `secret_id` from collected events, keyed by
/// event name. Only `GetSecretValue` events identify actual consumers.
pub fn actual_consumers(events_by_name: &EventsByName, secret_id: &str) -> Vec<Consumer> {
    let events = events_by_name
        .get(secret_events::GET_SECRET_VALUE)
        .map(Vec::as_slice)
        .unwrap_or(&[]);
    attribute(events, secret_id)
}

/// Reduce a batch of audit events to one [`Consumer`] per distinct actor
/// that touched `secret_id`, carrying each actor's most recent access.
///
/// Events whose identity cannot be resolved (a role identity missing its
/// session context) are skipped with a warning; the batch continues. An
/// empty result is a valid outcome, not an error.
pub fn attribute(events: &[AuditEvent], secret_id: &str) -> Vec<Consumer> {
    let mut latest: HashMap<String, Consumer> = HashMap::new();

    let matching = events.iter().filter(|event| {
        event
            .resources
            .iter()
            .any(|resource| resource_matches_secret(&resource.resource_name, secret_id))
    });

    for event in matching {
        let consumer = match consumer_from_event(event) {
            Ok(consumer) => consumer,
            Err(err) => {
                warn!(
                    event_id = %event.external_id,
                    event_category = %event.event_category,
                    error = %err,
                    "could not extract consumer from event, skipping"
                );
                continue;
            }
        };

        match latest.entry(consumer.external_id.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(consumer);
            }
            Entry::Occupied(mut slot) => {
                if consumer.accessed_resource_at > slot.get().accessed_resource_at {
                    slot.insert(consumer);
                }
            }
        }
    }

    latest.into_values().collect()
}

/// Order consumers by external id for deterministic presentation.
pub fn sort_consumers(consumers: &mut [Consumer]) {
    consumers.sort_by(|a, b| a.external_id.cmp(&b.external_id));
}

fn consumer_from_event(event: &AuditEvent) -> Result<Consumer, EngineError> {
    let identity = &event.user_identity;
    let classification = classify(identity);

    let (external_id, name) = if identity.kind.is_role() {
        // The actor behind a role lives in the session context; without it
        // there is nothing to attribute the access to.
        resolve_role_actor(identity)?
    } else {
        // Direct identity: the principal id is the actor.
        (identity.principal_id.clone(), identity.user_name.clone())
    };

    Ok(Consumer {
        category: classification.category,
        kind: classification.label.to_string(),
        name,
        external_id,
        external_resource_name: identity.arn.clone(),
        access_key_id: identity.access_key_id.clone(),
        accessed_resource_at: event.event_time,
    })
}

fn resolve_role_actor(identity: &UserIdentity) -> Result<(String, String), EngineError> {
    if identity.session_context.is_none() {
        return Err(EngineError::MissingSessionContext {
            principal_id: identity.principal_id.clone(),
        });
    }

    let entity_id = resolved_entity_id(&identity.principal_id).to_string();
    Ok((entity_id.clone(), entity_id))
}
