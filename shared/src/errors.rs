//! Shared error types for the launch decision pipeline

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid URL: {input}")]
    InvalidUrl { input: String },
}

pub type SharedResult<T> = Result<T, SharedError>;

/// Parse an absolute URL, mapping failures into `SharedError::InvalidUrl`
pub fn parse_url(input: &str) -> SharedResult<url::Url> {
    url::Url::parse(input).map_err(|_| SharedError::InvalidUrl {
        input: input.to_string(),
    })
}
