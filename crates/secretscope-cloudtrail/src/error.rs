use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectorError {
    /// CloudTrail API or transport failure while paging. Fatal to the
    /// whole collection: no partial result, no retries.
    #[error("CloudTrail lookup failed: {0}")]
    Api(String),

    /// The embedded event body could not be parsed. Fatal to the whole
    /// request: a malformed event could hide a real consumer, so the
    /// collection fails loudly instead of silently dropping it.
    #[error("malformed CloudTrail event: {0}")]
    MalformedEvent(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Walk the full error chain and join all causes into one string.
///
/// AWS SDK errors often have terse `Display` impls (e.g. "service error")
/// but useful detail in the source chain.
pub fn format_err_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}
