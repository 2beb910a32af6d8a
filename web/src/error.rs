/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::Json;
use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sea_orm::DbErr;
use std::fmt;
use store::error::StoreError;
use store::types::BaseResponse;

#[derive(Debug)]
pub enum WebError {
    NotFound(String),
    Conflict(String),
    Validation(String),
    Database(DbErr),
    JsonParsing(JsonRejection),
    FormParsing(FormRejection),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            WebError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            WebError::Validation(msg) => write!(f, "Validation error: {}", msg),
            WebError::Database(err) => write!(f, "Database error: {}", err),
            WebError::JsonParsing(err) => write!(f, "JSON parsing error: {}", err),
            WebError::FormParsing(err) => write!(f, "Form parsing error: {}", err),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebError::Database(err) => Some(err),
            WebError::JsonParsing(err) => Some(err),
            WebError::FormParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for WebError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(resource) => WebError::not_found(&resource),
            StoreError::Validation(msg) => WebError::Validation(msg),
            StoreError::Conflict(msg) => WebError::Conflict(msg),
            StoreError::Database(err) => WebError::Database(err),
        }
    }
}

impl From<JsonRejection> for WebError {
    fn from(err: JsonRejection) -> Self {
        WebError::JsonParsing(err)
    }
}

impl From<FormRejection> for WebError {
    fn from(err: FormRejection) -> Self {
        WebError::FormParsing(err)
    }
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::Validation(_) | WebError::JsonParsing(_) | WebError::FormParsing(_) => {
                StatusCode::BAD_REQUEST
            }
            WebError::NotFound(_) => StatusCode::NOT_FOUND,
            WebError::Conflict(_) => StatusCode::CONFLICT,
            WebError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            WebError::NotFound(msg)
            | WebError::Conflict(msg)
            | WebError::Validation(msg) => msg,
            WebError::JsonParsing(err) => format!("Invalid JSON: {}", err.body_text()),
            WebError::FormParsing(err) => format!("Invalid form: {}", err.body_text()),
            WebError::Database(err) => {
                tracing::error!("Database error: {}", err);
                "Database error".to_string()
            }
        };

        let body = Json(BaseResponse {
            error: true,
            message: error_message,
        });

        (status, body).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;

impl WebError {
    pub fn not_found(resource: &str) -> Self {
        WebError::NotFound(format!("{} not found", resource))
    }
}
