use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Errors surfaced to the user by the demo dispatch.
///
/// Both variants are recovered locally: they are reported through the
/// presentation sink and never touch the dataset cache.
#[derive(Debug, Error)]
pub enum LabError {
    /// The row-count request was not a positive integer.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An algorithm was given degenerate input or failed to converge.
    #[error("fit failed: {0}")]
    FitFailure(String),
}
