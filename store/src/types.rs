/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::consts::DEFAULT_ADMIN_NAME;
use super::database::Store;
use super::input::port_in_range;
use clap::Parser;
use entity::*;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug, Clone)]
#[command(name = "Holonet", display_name = "Holonet", bin_name = "holonet-server", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "HOLONET_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "HOLONET_IP", default_value = "0.0.0.0")]
    pub ip: String,
    #[arg(long, env = "PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "HOLONET_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "HOLONET_ADMIN_NAME", default_value = DEFAULT_ADMIN_NAME)]
    pub admin_name: String,
    #[arg(long, env = "HOLONET_STATE_FILE")]
    pub state_file: Option<String>,
}

#[derive(Debug)]
pub struct ServerState {
    pub store: Store,
    pub cli: Cli,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

/// Outcome of an idempotent favorite insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteOutcome {
    Created,
    AlreadyExists,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorites {
    pub planets: Vec<MFavoritePlanet>,
    pub characters: Vec<MFavoriteCharacter>,
}

pub type ECharacter = character::Entity;
pub type EFavoriteCharacter = favorite_character::Entity;
pub type EFavoritePlanet = favorite_planet::Entity;
pub type EPlanet = planet::Entity;
pub type EUser = user::Entity;

pub type MCharacter = character::Model;
pub type MFavoriteCharacter = favorite_character::Model;
pub type MFavoritePlanet = favorite_planet::Model;
pub type MPlanet = planet::Model;
pub type MUser = user::Model;

pub type ACharacter = character::ActiveModel;
pub type AFavoriteCharacter = favorite_character::ActiveModel;
pub type AFavoritePlanet = favorite_planet::ActiveModel;
pub type APlanet = planet::ActiveModel;
pub type AUser = user::ActiveModel;

pub type CCharacter = character::Column;
pub type CFavoriteCharacter = favorite_character::Column;
pub type CFavoritePlanet = favorite_planet::Column;
pub type CPlanet = planet::Column;
pub type CUser = user::Column;
