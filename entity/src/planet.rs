/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "planet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub population: Option<i64>,
    pub terrain: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_planet::Entity")]
    FavoritePlanet,
}

impl Related<super::favorite_planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritePlanet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
