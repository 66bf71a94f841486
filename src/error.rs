//! Error types and HTTP mapping for the address service

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use crate::api::ResultObject;

/// Generic message for failures the client cannot act on
pub const SERVICE_ERROR_MESSAGE: &str = "خطای سرویس";

/// Main error type for the address service
#[derive(Error, Debug)]
pub enum AddressError {
    /// A request field failed validation; the message is shown to the user as-is
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// The request could not be read at all (missing or malformed body, bad query)
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// No usable credentials were supplied
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Credentials are valid but the role is not allowed here
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    /// A referenced record does not exist
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// The backing service refused the operation
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl AddressError {
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// HTTP status this error is reported with
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            AddressError::Validation { .. } | AddressError::BadRequest { .. } => {
                StatusCode::BAD_REQUEST
            }
            AddressError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AddressError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AddressError::NotFound { .. } => StatusCode::NOT_FOUND,
            AddressError::Conflict { .. } => StatusCode::CONFLICT,
            AddressError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-friendly, localized error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AddressError::Validation { message }
            | AddressError::BadRequest { message }
            | AddressError::Unauthorized { message }
            | AddressError::Forbidden { message }
            | AddressError::NotFound { message }
            | AddressError::Conflict { message } => message.clone(),
            AddressError::Config { .. } => SERVICE_ERROR_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for AddressError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected with {}: {}", status, self);
        }

        let body: ResultObject<()> = ResultObject::message(self.user_message());
        (status, Json(body)).into_response()
    }
}
