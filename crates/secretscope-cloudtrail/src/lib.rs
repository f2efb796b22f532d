//! secretscope-cloudtrail
//!
//! The event-source collaborator: queries CloudTrail `LookupEvents` with
//! sequential cursor pagination and normalizes raw envelopes (embedded
//! JSON event bodies) into the canonical [`secretscope_core::AuditEvent`].

pub mod client;
pub mod collector;
pub mod error;
pub mod parse;

pub use crate::client::{load_sdk_config, CloudTrailClient};
pub use crate::collector::{collect_secret_events, collect_with_client};
pub use crate::error::CollectorError;
pub use crate::parse::normalize_event;
