use thiserror::Error;

/// Failure talking to the movie catalog.
///
/// Only the HTTP layer returns these; the catalog client logs and converts
/// them into empty results.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("catalog API key is not configured")]
    MissingApiKey,

    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}
