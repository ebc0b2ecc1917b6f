use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("malformed push payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("push payload missing field: {0}")]
    MissingField(&'static str),

    #[error(transparent)]
    Present(#[from] PresentError),
}

///
/// Failure reported by the platform notification surface.
///
#[derive(Debug, Error)]
#[error("{0}")]
pub struct PresentError(pub String);

#[derive(Debug, Error)]
#[error("{0}")]
pub struct CacheError(pub String);
