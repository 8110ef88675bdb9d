//! API error types with IntoResponse
//!
//! Every error body has the shape `{"detail": "..."}`. Only NotFound
//! carries a domain message; store failures are logged and reported
//! generically.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::db::DbError;
use crate::models::ValidationError;

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable reason, e.g. "Customer not found"
    pub detail: String,
}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Field failed length check (422)
    Validation(ValidationError),

    /// Row absent (404)
    NotFound { resource: &'static str },

    /// Missing or wrong API key (403)
    InvalidApiKey,

    /// Store error, including constraint violations (500, logged)
    Database(DbError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidApiKey => StatusCode::FORBIDDEN,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::NotFound { resource } => format!("{} not found", resource),
            Self::InvalidApiKey => "Could not validate API key".to_owned(),
            Self::Database(_) => "Internal Server Error".to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Database(e) = &self {
            // Log the actual error, return generic message
            if e.is_constraint_violation() {
                tracing::warn!(error = %e, "write rejected by constraint");
            } else {
                tracing::error!(error = %e, "database error");
            }
        }

        let body = ErrorBody {
            detail: self.detail(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, .. } => Self::NotFound { resource },
            _ => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_is_404_with_resource_detail() {
        let err = ApiError::from(DbError::NotFound {
            resource: "Customer",
            id: 9,
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "detail": "Customer not found" })
        );
    }

    #[tokio::test]
    async fn validation_error_is_422() {
        let err = ApiError::Validation(ValidationError::TooLong {
            field: "name",
            max: 100,
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await["detail"],
            "name exceeds maximum length of 100 characters"
        );
    }

    #[tokio::test]
    async fn invalid_api_key_is_403() {
        let response = ApiError::InvalidApiKey.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn database_error_hides_cause() {
        let err = ApiError::from(DbError::Sqlx(sqlx::Error::RowNotFound));
        assert!(matches!(err, ApiError::Database(_)));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["detail"], "Internal Server Error");
    }
}
