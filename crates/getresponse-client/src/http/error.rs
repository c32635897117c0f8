/*
[INPUT]:  Error sources (HTTP transport, API error documents, serialization, URLs)
[OUTPUT]: Structured error type carrying the verbatim API error body
[POS]:    Error handling layer - unified error type for the entire crate
[UPDATE]: When adding new error sources or changing error document parsing
*/

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Main error type for the GetResponse client
#[derive(Error, Debug)]
pub enum GetResponseError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error (status {status}, code {code:?}): {message}")]
    Api {
        status: u16,
        code: Option<i64>,
        message: String,
        body: Value,
    },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Caller input could not be turned into a request
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GetResponseError {
    /// HTTP status of an API error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            GetResponseError::Api { status, .. } => Some(*status),
            GetResponseError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the API reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND.as_u16())
    }

    /// Check if the API rejected the credentials
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// Create an API error from a status code and the raw response body.
    ///
    /// GetResponse error documents look like
    /// `{"httpStatus":404,"code":1013,"message":"Resource not found",...}`;
    /// `code` and `message` are lifted from them when present. A body that is
    /// not JSON is kept as a JSON string.
    pub fn api_error(status: StatusCode, raw_body: &str) -> Self {
        let body = serde_json::from_str::<Value>(raw_body)
            .unwrap_or_else(|_| Value::String(raw_body.to_string()));

        let code = body.get("code").and_then(Value::as_i64);
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string()
            });

        GetResponseError::Api {
            status: status.as_u16(),
            code,
            message,
            body,
        }
    }
}

/// Result type alias for GetResponse operations
pub type Result<T> = std::result::Result<T, GetResponseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_from_error_document() {
        let raw = r#"{"httpStatus":404,"code":1013,"codeDescription":"Resource not found","message":"Campaign not found","moreInfo":"https://apidocs.getresponse.com/v3/errors/1013","context":[],"uuid":"a1b2"}"#;
        let err = GetResponseError::api_error(StatusCode::NOT_FOUND, raw);
        match &err {
            GetResponseError::Api {
                status,
                code,
                message,
                body,
            } => {
                assert_eq!(*status, 404);
                assert_eq!(*code, Some(1013));
                assert_eq!(message, "Campaign not found");
                assert_eq!(body["codeDescription"], "Resource not found");
            }
            _ => panic!("Expected Api error variant"),
        }
        assert!(err.is_not_found());
        assert!(!err.is_auth_error());
    }

    #[test]
    fn test_api_error_from_plain_text() {
        let err = GetResponseError::api_error(StatusCode::BAD_GATEWAY, "upstream down");
        match err {
            GetResponseError::Api {
                code, message, body, ..
            } => {
                assert_eq!(code, None);
                assert_eq!(message, "Bad Gateway");
                assert_eq!(body, Value::String("upstream down".to_string()));
            }
            _ => panic!("Expected Api error variant"),
        }
    }

    #[test]
    fn test_error_is_auth_error() {
        assert!(GetResponseError::api_error(StatusCode::UNAUTHORIZED, "{}").is_auth_error());
        assert!(GetResponseError::api_error(StatusCode::FORBIDDEN, "").is_auth_error());
        assert!(!GetResponseError::Config("missing key".into()).is_auth_error());
        assert_eq!(GetResponseError::InvalidInput("x".into()).status(), None);
    }
}
