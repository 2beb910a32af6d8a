/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod people;
pub mod planets;
pub mod users;

use crate::error::{WebError, WebResult};
use crate::sitemap::{Sitemap, generate_sitemap};
use axum::extract::Json;
use store::types::BaseResponse;

pub async fn handle_404() -> WebError {
    WebError::NotFound("Not Found".to_string())
}

pub async fn get_health() -> WebResult<Json<BaseResponse<String>>> {
    let res = BaseResponse {
        error: false,
        message: "200 ALIVE".to_string(),
    };

    Ok(Json(res))
}

pub async fn get_sitemap() -> Json<Sitemap> {
    Json(generate_sitemap())
}

pub(crate) fn message(message: &str) -> Json<BaseResponse<String>> {
    Json(BaseResponse {
        error: false,
        message: message.to_string(),
    })
}
