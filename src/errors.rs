use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<WidgetError> for AppError {
    fn from(err: WidgetError) -> Self {
        match err {
            WidgetError::NothingDisplayed | WidgetError::ConfirmationRequired => {
                Self::bad_request(err.to_string())
            }
            WidgetError::HistoryEntryNotFound(_) => Self::not_found(err.to_string()),
            WidgetError::Clipboard(_) | WidgetError::Storage(_) => Self::internal(err),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid joke API url: {0}")]
    Url(String),
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("joke API responded with {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed joke payload: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("joke payload is missing {0}")]
    Incomplete(&'static str),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("no joke is displayed")]
    NothingDisplayed,
    #[error("history entry {0} not found")]
    HistoryEntryNotFound(i64),
    #[error("clearing history requires confirmation")]
    ConfirmationRequired,
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
