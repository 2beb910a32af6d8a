/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::message;
use crate::error::WebResult;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;
use store::characters::{CharacterPatch, NewCharacter};
use store::types::*;

pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<Vec<MCharacter>>> {
    let characters = state.store.list_characters().await?;

    Ok(Json(characters))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    body: Result<Json<NewCharacter>, JsonRejection>,
) -> WebResult<(StatusCode, Json<MCharacter>)> {
    let Json(body) = body?;
    let character = state.store.create_character(body).await?;

    Ok((StatusCode::CREATED, Json(character)))
}

pub async fn get_person(
    state: State<Arc<ServerState>>,
    Path(id): Path<i32>,
) -> WebResult<Json<MCharacter>> {
    let character = state.store.get_character(id).await?;

    Ok(Json(character))
}

pub async fn put_person(
    state: State<Arc<ServerState>>,
    Path(id): Path<i32>,
    body: Result<Json<CharacterPatch>, JsonRejection>,
) -> WebResult<Json<MCharacter>> {
    let Json(body) = body?;
    let character = state.store.update_character(id, body).await?;

    Ok(Json(character))
}

pub async fn delete_person(
    state: State<Arc<ServerState>>,
    Path(id): Path<i32>,
) -> WebResult<Json<BaseResponse<String>>> {
    state.store.delete_character(id).await?;

    Ok(message("Character deleted"))
}
