use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::invoice::InvoiceError;
use crate::domain::job::JobError;
use crate::domain::marketplace::MarketplaceError;

use super::dtos::ErrorResponse;

/// Error type that maps domain errors to HTTP responses
#[derive(Debug)]
pub enum ApiError {
  /// Validation error (400 Bad Request)
  Validation(String),

  /// A backing service failed or did not answer (502 Bad Gateway)
  Upstream(String),

  /// Internal server error (500 Internal Server Error)
  Internal(String),
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
      ApiError::Upstream(msg) => write!(f, "Upstream error: {}", msg),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    let (error_type, message) = match self {
      ApiError::Validation(msg) => ("validation_error", msg.clone()),
      ApiError::Upstream(msg) => {
        tracing::warn!("Upstream error: {}", msg);
        (
          "upstream_error",
          "A backing service is unavailable. Please try again".to_string(),
        )
      }
      ApiError::Internal(msg) => {
        // Don't expose internal error details in production
        tracing::error!("Internal error: {}", msg);
        (
          "internal_error",
          "An internal server error occurred".to_string(),
        )
      }
    };

    let error_response = ErrorResponse {
      error: error_type.to_string(),
      message,
    };

    HttpResponse::build(status)
      .content_type(ContentType::json())
      .json(error_response)
  }
}

impl From<InvoiceError> for ApiError {
  fn from(error: InvoiceError) -> Self {
    match error {
      InvoiceError::Validation(err) => ApiError::Validation(err.to_string()),
      InvoiceError::SubmissionFailed(_)
      | InvoiceError::SubmissionTimedOut(_)
      | InvoiceError::SubmissionAborted
      | InvoiceError::Listing(_) => ApiError::Upstream(error.to_string()),
    }
  }
}

impl From<JobError> for ApiError {
  fn from(error: JobError) -> Self {
    match error {
      JobError::InvalidStatus(_) => ApiError::Validation(error.to_string()),
      JobError::Listing(_) => ApiError::Upstream(error.to_string()),
    }
  }
}

impl From<MarketplaceError> for ApiError {
  fn from(error: MarketplaceError) -> Self {
    match error {
      MarketplaceError::InvalidCategory(_) => ApiError::Validation(error.to_string()),
      MarketplaceError::Catalog(_) => ApiError::Upstream(error.to_string()),
    }
  }
}

impl From<tera::Error> for ApiError {
  fn from(error: tera::Error) -> Self {
    ApiError::Internal(format!("Template error: {:?}", error))
  }
}
