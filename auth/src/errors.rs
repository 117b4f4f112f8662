//! Errors returned while fetching the provider metadata

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("failed to create HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error(transparent)]
    Transport(reqwest::Error),

    #[error("cannot fetch OpenId metadata (HTTP response status = {0})")]
    HttpStatus(String),

    #[error("failed to read OpenId metadata: {0}")]
    BodyRead(#[source] reqwest::Error),

    #[error("cannot parse OpenId metadata: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(
        "mismatch between the configured issuer_uri ({configured}) and the exposed issuer URI in OpenId provider metadata ({exposed})"
    )]
    IssuerMismatch { configured: String, exposed: String },

    #[error("the OpenID provider does not expose an authorization endpoint")]
    MissingAuthorizationEndpoint,
}

pub type Result<T> = std::result::Result<T, MetadataError>;
