//! Thin CloudTrail client: config resolution and paginated event lookup.

use aws_sdk_cloudtrail::types::{LookupAttribute, LookupAttributeKey};
use tracing::debug;

use secretscope_core::AuditEvent;

use crate::error::{format_err_chain, CollectorError};
use crate::parse::normalize_event;

/// Resolve an SDK config, honoring optional region and profile overrides.
///
/// Empty or absent values are not applied, so the profile's (or the
/// environment's) default wins.
pub async fn load_sdk_config(
    region: Option<&str>,
    profile: Option<&str>,
) -> aws_config::SdkConfig {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

    if let Some(region) = region.filter(|r| !r.is_empty()) {
        loader = loader.region(aws_config::Region::new(region.to_string()));
    }
    if let Some(profile) = profile.filter(|p| !p.is_empty()) {
        loader = loader.profile_name(profile);
    }

    loader.load().await
}

/// Wrapper around the CloudTrail SDK client exposing normalized events.
pub struct CloudTrailClient {
    client: aws_sdk_cloudtrail::Client,
}

impl CloudTrailClient {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: aws_sdk_cloudtrail::Client::new(config),
        }
    }

    /// Fetch all events named `event_name` since `start_time`, normalized.
    ///
    /// Pagination is strictly sequential: each page request depends on
    /// the previous page's continuation token, which also keeps the
    /// security-relevant fetch trace auditable. Any API error aborts the
    /// whole lookup with no partial result.
    pub async fn lookup_events(
        &self,
        event_name: &str,
        start_time: jiff::Timestamp,
    ) -> Result<Vec<AuditEvent>, CollectorError> {
        let raw_events = self.query_raw_events(event_name, start_time).await?;
        raw_events.iter().map(normalize_event).collect()
    }

    async fn query_raw_events(
        &self,
        event_name: &str,
        start_time: jiff::Timestamp,
    ) -> Result<Vec<aws_sdk_cloudtrail::types::Event>, CollectorError> {
        let lookup_attribute = LookupAttribute::builder()
            .attribute_key(LookupAttributeKey::EventName)
            .attribute_value(event_name)
            .build()
            .map_err(|e| CollectorError::Api(format_err_chain(&e)))?;

        let start_millis = start_time.as_millisecond();

        let mut events = Vec::new();
        let mut next_token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let resp = self
                .client
                .lookup_events()
                .lookup_attributes(lookup_attribute.clone())
                .start_time(aws_smithy_types::DateTime::from_millis(start_millis))
                .set_next_token(next_token)
                .send()
                .await
                .map_err(|e| CollectorError::Api(format_err_chain(&e)))?;

            events.extend(resp.events.unwrap_or_default());
            pages += 1;

            next_token = resp.next_token;
            if next_token.is_none() {
                break;
            }
        }

        debug!(event_name, pages, total = events.len(), "CloudTrail lookup complete");
        Ok(events)
    }
}
