use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use crate::models::qr_code::{QrAction, QrStatus};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("cannot {action} {unique_id}: code is {status}")]
    InvalidTransition {
        unique_id: String,
        status: QrStatus,
        action: QrAction,
    },

    #[error("not authorized: {0}")]
    Authorization(String),
}

impl RegistryError {
    pub fn qr_not_found(unique_id: &str) -> Self {
        RegistryError::NotFound {
            kind: "QR code",
            id: unique_id.to_string(),
        }
    }

    pub fn batch_not_found(batch_id: &str) -> Self {
        RegistryError::NotFound {
            kind: "batch",
            id: batch_id.to_string(),
        }
    }

    pub fn user_not_found(user_id: &str) -> Self {
        RegistryError::NotFound {
            kind: "user",
            id: user_id.to_string(),
        }
    }
}

impl ResponseError for RegistryError {
    fn status_code(&self) -> StatusCode {
        match self {
            RegistryError::Validation(_) => StatusCode::BAD_REQUEST,
            RegistryError::NotFound { .. } => StatusCode::NOT_FOUND,
            RegistryError::InvalidTransition { .. } => StatusCode::CONFLICT,
            RegistryError::Authorization(_) => StatusCode::FORBIDDEN,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}
