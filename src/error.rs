use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Reasons a trip request is rejected before any plan is built.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select at least two places to visit.")]
    InsufficientPlaces,

    #[error("Please select a mode of transport.")]
    MissingTransportMode,

    #[error("Please select a valid date range (at least 1 day).")]
    InvalidDateRange,
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::InsufficientPlaces => "INSUFFICIENT_PLACES",
            ValidationError::MissingTransportMode => "MISSING_TRANSPORT_MODE",
            ValidationError::InvalidDateRange => "INVALID_DATE_RANGE",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ResponseError for ValidationError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiError {
            code: self.error_code().to_string(),
            message: self.to_string(),
        })
    }
}
