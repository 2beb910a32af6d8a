/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2 hash. Never leaves the process.
    #[serde(skip_serializing)]
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub subscription_date: Date,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_character::Entity")]
    FavoriteCharacter,
    #[sea_orm(has_many = "super::favorite_planet::Entity")]
    FavoritePlanet,
}

impl Related<super::favorite_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteCharacter.def()
    }
}

impl Related<super::favorite_planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritePlanet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
