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
use store::planets::{NewPlanet, PlanetPatch};
use store::types::*;

pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<Vec<MPlanet>>> {
    let planets = state.store.list_planets().await?;

    Ok(Json(planets))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    body: Result<Json<NewPlanet>, JsonRejection>,
) -> WebResult<(StatusCode, Json<MPlanet>)> {
    let Json(body) = body?;
    let planet = state.store.create_planet(body).await?;

    Ok((StatusCode::CREATED, Json(planet)))
}

pub async fn get_planet(
    state: State<Arc<ServerState>>,
    Path(id): Path<i32>,
) -> WebResult<Json<MPlanet>> {
    let planet = state.store.get_planet(id).await?;

    Ok(Json(planet))
}

pub async fn put_planet(
    state: State<Arc<ServerState>>,
    Path(id): Path<i32>,
    body: Result<Json<PlanetPatch>, JsonRejection>,
) -> WebResult<Json<MPlanet>> {
    let Json(body) = body?;
    let planet = state.store.update_planet(id, body).await?;

    Ok(Json(planet))
}

pub async fn delete_planet(
    state: State<Arc<ServerState>>,
    Path(id): Path<i32>,
) -> WebResult<Json<BaseResponse<String>>> {
    state.store.delete_planet(id).await?;

    Ok(message("Planet deleted"))
}
