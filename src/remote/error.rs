use thiserror::Error;

#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("YouTube is not configured")]
    NotConfigured,
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Bad request URL: {0}")]
    Url(String),
    #[error("YouTube API returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Channel has no uploads playlist")]
    MissingUploads,
}
