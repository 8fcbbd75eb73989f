use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{resource} already exists: {reason}")]
    ResourceAlreadyExists {
        resource: &'static str,
        reason: String,
        user_id: String,
        series_tmdb_id: String,
    },

    #[error("{resource} not found")]
    ResourceNotFound { resource: &'static str, user_id: String, series_tmdb_id: String },

    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn already_exists(
        resource: &'static str,
        reason: impl Into<String>,
        user_id: &str,
        series_tmdb_id: i32,
    ) -> Self {
        Self::ResourceAlreadyExists {
            resource,
            reason: reason.into(),
            user_id: user_id.to_string(),
            series_tmdb_id: series_tmdb_id.to_string(),
        }
    }

    pub fn not_found(resource: &'static str, user_id: &str, series_tmdb_id: i32) -> Self {
        Self::ResourceNotFound {
            resource,
            user_id: user_id.to_string(),
            series_tmdb_id: series_tmdb_id.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ResourceAlreadyExists { .. } => StatusCode::CONFLICT,
            AppError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<jiff::Error> for AppError {
    fn from(err: jiff::Error) -> Self {
        Self::Internal(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::ResourceAlreadyExists { resource, user_id, series_tmdb_id, .. } => json!({
                "error": "resource_already_exists",
                "resource": resource,
                "message": self.to_string(),
                "details": { "user_id": user_id, "series_tmdb_id": series_tmdb_id },
            }),
            AppError::ResourceNotFound { resource, user_id, series_tmdb_id } => json!({
                "error": "resource_not_found",
                "resource": resource,
                "message": self.to_string(),
                "details": { "user_id": user_id, "series_tmdb_id": series_tmdb_id },
            }),
            AppError::Database(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "request failed");
                json!({ "error": "internal", "message": "internal server error" })
            },
        };
        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
