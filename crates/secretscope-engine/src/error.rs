use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A role-backed identity arrived without a session context, so the
    /// acting entity cannot be resolved. Non-fatal: the event is skipped
    /// and attribution continues.
    #[error("missing session context for role identity {principal_id}")]
    MissingSessionContext { principal_id: String },
}
