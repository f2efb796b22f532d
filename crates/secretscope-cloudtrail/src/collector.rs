//! Collector entry point: fetch all supported secret events for a window.

use jiff::ToSpan;
use tracing::info;

use secretscope_core::{secret_events, EventsByName};

use crate::client::{load_sdk_config, CloudTrailClient};
use crate::error::CollectorError;

/// Collect all supported Secrets Manager events from the last `days_back`
/// days, resolving AWS config with the given region/profile overrides.
pub async fn collect_secret_events(
    region: Option<&str>,
    profile: Option<&str>,
    days_back: u32,
) -> Result<EventsByName, CollectorError> {
    let config = load_sdk_config(region, profile).await;
    let client = CloudTrailClient::new(&config);
    collect_with_client(&client, days_back).await
}

/// Collect supported events with an existing client, keyed by event name.
pub async fn collect_with_client(
    client: &CloudTrailClient,
    days_back: u32,
) -> Result<EventsByName, CollectorError> {
    let start_time = jiff::Timestamp::now()
        .saturating_sub((days_back as i64 * 24).hours())
        .unwrap_or(jiff::Timestamp::MIN);

    let mut events_by_name = EventsByName::new();
    for event_name in secret_events::SUPPORTED {
        let events = client.lookup_events(event_name, start_time).await?;
        info!(event_name = %event_name, count = events.len(), "collected CloudTrail events");
        events_by_name
            .entry(event_name.to_string())
            .or_default()
            .extend(events);
    }

    Ok(events_by_name)
}
