// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

use crate::shared::constants::errors;
use crate::shared::service_error::{FieldErrors, ServiceError};

/// Uniform envelope: `{data, message?}` on success, `{errors: {...}}` on failure.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ApiErrors>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ApiErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub fields: FieldErrors,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            data: Some(data),
            message: None,
            errors: None,
        })
    }

    pub fn success_with_message(data: T, message: &str) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            data: Some(data),
            message: Some(message.to_string()),
            errors: None,
        })
    }
}

impl ApiResponse<()> {
    /// Success without a payload, e.g. deletes and password operations.
    pub fn message(message: &str) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse::<()> {
            data: None,
            message: Some(message.to_string()),
            errors: None,
        })
    }

    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            data: None,
            message: None,
            errors: Some(ApiErrors {
                message: Some(message.to_string()),
                fields: FieldErrors::new(),
            }),
        })
    }

    pub fn validation(fields: &FieldErrors) -> HttpResponse {
        HttpResponse::BadRequest().json(ApiResponse::<()> {
            data: None,
            message: None,
            errors: Some(ApiErrors {
                message: None,
                fields: fields.clone(),
            }),
        })
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    pub fn forbidden(message: &str) -> HttpResponse {
        Self::error(StatusCode::FORBIDDEN, message)
    }

    pub fn unauthorized(message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, message)
    }

    pub fn conflict(message: &str) -> HttpResponse {
        Self::error(StatusCode::CONFLICT, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, errors::SERVER_ERROR)
    }

    pub fn from_service_error(err: &ServiceError) -> HttpResponse {
        match err {
            ServiceError::BadRequest(msg) => Self::bad_request(msg),
            ServiceError::Validation(fields) => Self::validation(fields),
            ServiceError::Unauthorized(msg) => Self::unauthorized(msg),
            ServiceError::Forbidden(msg) => Self::forbidden(msg),
            ServiceError::NotFound(msg) => Self::not_found(msg),
            ServiceError::Conflict(msg) => Self::conflict(msg),
            ServiceError::Internal(msg) => Self::error(StatusCode::INTERNAL_SERVER_ERROR, msg),
        }
    }
}
