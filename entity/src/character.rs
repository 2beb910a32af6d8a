/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A person from the saga. Stored in the `people` table, served under `/people`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "people")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub gender: Option<String>,
    /// Free-form text such as `19BBY`.
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_character::Entity")]
    FavoriteCharacter,
}

impl Related<super::favorite_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteCharacter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
