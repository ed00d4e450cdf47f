// ============================================================================
// Relay Errors
// ============================================================================
//
// Failures of the outbound order-creation call, kept as distinct variants so
// the handler can pick a response per kind instead of one generic catch.
// An upstream *validation* rejection is not an error here; it is a normal
// outcome (see CreateOrderOutcome::Rejected).
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned a non-JSON body: {0}")]
    InvalidBody(#[source] serde_json::Error),
}
