/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::message;
use crate::error::WebResult;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;
use store::types::*;

pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<Vec<MUser>>> {
    let users = state.store.list_users().await?;

    Ok(Json(users))
}

pub async fn get_favorites(
    state: State<Arc<ServerState>>,
    Path(user_id): Path<i32>,
) -> WebResult<Json<Favorites>> {
    let favorites = state.store.find_favorites_by_user(user_id).await?;

    Ok(Json(favorites))
}

pub async fn post_favorite_person(
    state: State<Arc<ServerState>>,
    Path((user_id, people_id)): Path<(i32, i32)>,
) -> WebResult<(StatusCode, Json<BaseResponse<String>>)> {
    let res = match state
        .store
        .add_favorite_character(user_id, people_id)
        .await?
    {
        FavoriteOutcome::Created => (StatusCode::CREATED, message("Character favorite added")),
        FavoriteOutcome::AlreadyExists => {
            (StatusCode::OK, message("Character already in favorites"))
        }
    };

    Ok(res)
}

pub async fn delete_favorite_person(
    state: State<Arc<ServerState>>,
    Path((user_id, people_id)): Path<(i32, i32)>,
) -> WebResult<Json<BaseResponse<String>>> {
    state
        .store
        .remove_favorite_character(user_id, people_id)
        .await?;

    Ok(message("Character favorite removed"))
}

pub async fn post_favorite_planet(
    state: State<Arc<ServerState>>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> WebResult<(StatusCode, Json<BaseResponse<String>>)> {
    let res = match state.store.add_favorite_planet(user_id, planet_id).await? {
        FavoriteOutcome::Created => (StatusCode::CREATED, message("Planet favorite added")),
        FavoriteOutcome::AlreadyExists => (StatusCode::OK, message("Planet already in favorites")),
    };

    Ok(res)
}

pub async fn delete_favorite_planet(
    state: State<Arc<ServerState>>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> WebResult<Json<BaseResponse<String>>> {
    state
        .store
        .remove_favorite_planet(user_id, planet_id)
        .await?;

    Ok(message("Planet favorite removed"))
}
