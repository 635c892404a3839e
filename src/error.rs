use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Jira authentication failed: {0}")]
    AuthenticationFailure(String),

    #[error("Jira issue query failed: {0}")]
    QueryFailure(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type BridgeResult<T> = Result<T, BridgeError>;

impl BridgeError {
    /// Status code reported to the caller when this error ends a request.
    pub fn status_code(&self) -> StatusCode {
        match self {
            BridgeError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            BridgeError::AuthenticationFailure(_) | BridgeError::QueryFailure(_) => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for BridgeError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

/// Non-fatal failure of a single issue transition. Recorded and logged,
/// never escalated to the request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionWarning {
    #[error("Jira rejected the transition with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Transition request failed: {0}")]
    Request(String),
}

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> BridgeResult<T>;
    fn with_context<F>(self, f: F) -> BridgeResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> BridgeResult<T> {
        self.map_err(|e| BridgeError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> BridgeResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| BridgeError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> BridgeResult<T> {
        self.ok_or_else(|| BridgeError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> BridgeResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| BridgeError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! bridge_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::BridgeError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::BridgeError::$error_type(format!($fmt, $($arg)*))
    };
}
