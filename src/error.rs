use std::fmt;

use reqwest::{Method, StatusCode};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// The remote call an API error was returned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateRecord,
    ListRecords,
    DeleteRecord,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::CreateRecord => "create TXT record",
            Operation::ListRecords => "list DNS records",
            Operation::DeleteRecord => "delete DNS record",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("some credentials information are missing: {0}")]
    MissingCredentials(&'static str),

    #[error("failed to read credentials file {path} ({var}): {source}")]
    CredentialsFile {
        var: &'static str,
        path: String,
        source: std::io::Error,
    },

    #[error("invalid API endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("API key is not a valid header value")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),

    #[error("can't parse second-level domain from {0:?}")]
    InvalidDomain(String),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("{0}: authentication was not successful")]
    Unauthorized(Operation),

    #[error("{0}: not authorized")]
    Forbidden(Operation),

    #[error("{0}: rate limited, try again later")]
    RateLimited(Operation),

    #[error("{0}: internal server error, try again later")]
    ServerError(Operation),

    #[error("validation error, check your payload")]
    Validation,

    #[error("DNS record to delete not found: {0}")]
    RecordNotFound(String),

    #[error("unhandled http status response for {method} {url}: status {status}, body: {body}")]
    UnexpectedResponse {
        method: Method,
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("failed to decode DNS records: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// Whether a caller may reasonably retry the failed operation as is.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::RateLimited(_) | Error::ServerError(_) => true,
            Error::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}
