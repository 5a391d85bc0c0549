use thiserror::Error;

/// The JSON encoder rejected a message.
///
/// Returned unchanged from the underlying encoder, e.g. for a map whose keys
/// cannot be written as JSON object keys, or a failed write.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EncodeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
