use std::time::Duration;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    // standard web stuffs
    #[error("already exists")]
    AlreadyExists,
    #[error("not found")]
    NotFound,
    #[error("validation error: {0}")]
    Validation(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unauthorized")]
    Unauthorized,

    // infra things
    #[error(transparent)]
    Db(sea_orm::DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::NotFound => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Db(_) => "DB_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn public_message(&self) -> String {
        match self {
            // never leak storage details
            Self::Db(_) | Self::Internal(_) => "internal server error".to_string(),
            other => other.to_string(),
        }
    }

    fn from_db(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
            tracing::debug!(detail = %detail, "Unique constraint violated");
            return AppError::AlreadyExists;
        }
        match &err {
            DbErr::RecordNotFound(_) => AppError::NotFound,
            _ => AppError::Db(err),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::AlreadyExists => StatusCode::CONFLICT,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        HttpResponse::build(self.status_code())
            .json(ErrorBody { error: self.kind(), message: self.public_message() })
    }
}

/// Startup and shutdown failures. Any of these ends the process.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("database error: {0}")]
    Database(#[from] DbErr),
    #[error("could not listen on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not gracefully shutdown the server: {in_flight} request(s) still running after {window:?}")]
    ShutdownTimeout { window: Duration, in_flight: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_db_errors() {
        let not_found = AppError::from(DbErr::RecordNotFound("product".into()));
        assert!(matches!(not_found, AppError::NotFound));
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let other = AppError::from(DbErr::Custom("boom".into()));
        assert_eq!(other.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(other.public_message(), "internal server error");
    }

    #[test]
    fn unauthorized_message_is_uniform() {
        assert_eq!(AppError::Unauthorized.public_message(), "unauthorized");
        assert_eq!(AppError::Unauthorized.kind(), "UNAUTHORIZED");
    }
}
