//! secretscope-engine
//!
//! The consumer-attribution core: matches audit-event resource references
//! against a target secret, classifies acting identities into a
//! human/machine taxonomy, and collapses repeated access to the most
//! recent event per identity.
//!
//! Pure and synchronous: no I/O, no shared state across calls.

pub mod attribution;
pub mod classifier;
pub mod error;
pub mod matcher;

pub use crate::attribution::{actual_consumers, attribute, sort_consumers};
pub use crate::classifier::{classify, resolved_entity_id, Classification};
pub use crate::error::EngineError;
pub use crate::matcher::resource_matches_secret;
