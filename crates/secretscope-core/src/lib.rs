//! secretscope-core
//!
//! Pure domain types shared across the Secretscope workspace: audit events,
//! user identities, and derived consumers. No AWS SDK dependency — this is
//! the shared vocabulary of the system.

pub mod models;
pub mod secret_events;

pub use crate::models::consumer::{Consumer, ConsumerCategory};
pub use crate::models::event::{AuditEvent, EventResource, EventsByName};
pub use crate::models::identity::{
    FederationAttributes, IdentityKind, SessionAttributes, SessionContext, SessionIssuer,
    UserIdentity, WebIdFederationData,
};
