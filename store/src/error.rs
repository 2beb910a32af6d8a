/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    pub fn not_found(resource: &str) -> Self {
        StoreError::NotFound(resource.to_string())
    }

    pub fn missing_field(field: &str) -> Self {
        StoreError::Validation(format!("Missing required field: {}", field))
    }

    pub fn already_exists(resource: &str) -> Self {
        StoreError::Conflict(format!("{} already exists", resource))
    }
}
