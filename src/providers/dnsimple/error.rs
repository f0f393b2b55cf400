use reqwest::StatusCode;
use thiserror::Error;

use crate::error::Error;
use crate::providers::dnsimple::types::DnsimpleApiError;

#[derive(Error, Debug)]
pub enum DnsimpleError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl DnsimpleError {
    pub(crate) fn from_response(status: StatusCode, body: Option<DnsimpleApiError>) -> Self {
        let message = body
            .map(|b| b.message)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());
        match status {
            StatusCode::UNAUTHORIZED => DnsimpleError::Unauthorized(message),
            StatusCode::NOT_FOUND => DnsimpleError::NotFound(message),
            _ => DnsimpleError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}

/// Wraps a registrar failure with the operation that triggered it.
pub fn map_error(context: impl Into<String>) -> impl FnOnce(DnsimpleError) -> Error {
    move |e| Error::registrar(context, e)
}
