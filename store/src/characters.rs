/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, QueryOrder};
use serde::{Deserialize, Serialize};

use super::database::Store;
use super::error::{StoreError, StoreResult};
use super::input::{deserialize_some, require_text};
use super::types::*;

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct NewCharacter {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
}

/// Partial update. An absent field keeps its value, an explicit `null` clears it.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct CharacterPatch {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub gender: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub birth_year: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub eye_color: Option<Option<String>>,
}

impl Store {
    pub async fn list_characters(&self) -> StoreResult<Vec<MCharacter>> {
        let characters = ECharacter::find()
            .order_by_asc(CCharacter::Id)
            .all(self.connection())
            .await?;

        Ok(characters)
    }

    pub async fn get_character(&self, id: i32) -> StoreResult<MCharacter> {
        ECharacter::find_by_id(id)
            .one(self.connection())
            .await?
            .ok_or_else(|| StoreError::not_found("Character"))
    }

    pub async fn create_character(&self, new: NewCharacter) -> StoreResult<MCharacter> {
        let name = require_text("name", new.name)?;

        let character = ACharacter {
            name: Set(name),
            gender: Set(new.gender),
            birth_year: Set(new.birth_year),
            eye_color: Set(new.eye_color),
            ..Default::default()
        };

        let character = character.insert(self.connection()).await?;
        tracing::debug!(id = character.id, "Created character");

        Ok(character)
    }

    pub async fn update_character(&self, id: i32, patch: CharacterPatch) -> StoreResult<MCharacter> {
        let character = self.get_character(id).await?;
        let mut acharacter = character.clone().into_active_model();

        if let Some(name) = patch.name {
            acharacter.name = Set(require_text("name", name)?);
        }

        if let Some(gender) = patch.gender {
            acharacter.gender = Set(gender);
        }

        if let Some(birth_year) = patch.birth_year {
            acharacter.birth_year = Set(birth_year);
        }

        if let Some(eye_color) = patch.eye_color {
            acharacter.eye_color = Set(eye_color);
        }

        if !acharacter.is_changed() {
            return Ok(character);
        }

        Ok(acharacter.update(self.connection()).await?)
    }

    /// Favorites pointing at the character go with it (`ON DELETE CASCADE`).
    pub async fn delete_character(&self, id: i32) -> StoreResult<()> {
        let result = ECharacter::delete_by_id(id)
            .exec(self.connection())
            .await?;

        if result.rows_affected == 0 {
            return Err(StoreError::not_found("Character"));
        }

        tracing::debug!(id, "Deleted character");
        Ok(())
    }
}
