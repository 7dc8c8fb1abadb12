/// Crate-level error type for the spectromat library.
///
/// All precondition violations — buffers too short to frame, hop lengths
/// that cannot advance, unknown window names — are reported as a single
/// `InvalidInput` kind. Validation happens eagerly, before any output
/// allocation, so an error means nothing was computed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input value.
    #[error("invalid input `{name}`: got {value}, {reason}")]
    InvalidInput {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Convenience Result type for spectromat operations.
pub type Result<T> = std::result::Result<T, Error>;
