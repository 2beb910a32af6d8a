/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Favorite join rows between a user and a character or planet.
//!
//! Adds are idempotent: an existing pair is reported as
//! [`FavoriteOutcome::AlreadyExists`]. The unique indexes on
//! `(user_id, character_id)` and `(user_id, planet_id)` catch the concurrent
//! insert that slips past the existence check, which is reported the same way.

use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbErr, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, SqlErr,
};

use super::database::Store;
use super::error::{StoreError, StoreResult};
use super::types::*;

impl Store {
    pub async fn find_favorites_by_user(&self, user_id: i32) -> StoreResult<Favorites> {
        self.get_user(user_id).await?;

        let planets = EFavoritePlanet::find()
            .filter(CFavoritePlanet::UserId.eq(user_id))
            .order_by_asc(CFavoritePlanet::Id)
            .all(self.connection())
            .await?;

        let characters = EFavoriteCharacter::find()
            .filter(CFavoriteCharacter::UserId.eq(user_id))
            .order_by_asc(CFavoriteCharacter::Id)
            .all(self.connection())
            .await?;

        Ok(Favorites {
            planets,
            characters,
        })
    }

    pub async fn list_favorite_planets(&self) -> StoreResult<Vec<MFavoritePlanet>> {
        let favorites = EFavoritePlanet::find()
            .order_by_asc(CFavoritePlanet::Id)
            .all(self.connection())
            .await?;

        Ok(favorites)
    }

    pub async fn list_favorite_characters(&self) -> StoreResult<Vec<MFavoriteCharacter>> {
        let favorites = EFavoriteCharacter::find()
            .order_by_asc(CFavoriteCharacter::Id)
            .all(self.connection())
            .await?;

        Ok(favorites)
    }

    pub async fn add_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> StoreResult<FavoriteOutcome> {
        self.get_character(character_id).await?;
        self.get_user(user_id).await?;

        if self
            .find_favorite_character(user_id, character_id)
            .await?
            .is_some()
        {
            return Ok(FavoriteOutcome::AlreadyExists);
        }

        let favorite = AFavoriteCharacter {
            user_id: Set(user_id),
            character_id: Set(character_id),
            ..Default::default()
        };

        match favorite.insert(self.connection()).await {
            Ok(_) => {
                tracing::debug!(user_id, character_id, "Added favorite character");
                Ok(FavoriteOutcome::Created)
            }
            Err(err) => insert_outcome(err, "Character"),
        }
    }

    pub async fn add_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> StoreResult<FavoriteOutcome> {
        self.get_planet(planet_id).await?;
        self.get_user(user_id).await?;

        if self.find_favorite_planet(user_id, planet_id).await?.is_some() {
            return Ok(FavoriteOutcome::AlreadyExists);
        }

        let favorite = AFavoritePlanet {
            user_id: Set(user_id),
            planet_id: Set(planet_id),
            ..Default::default()
        };

        match favorite.insert(self.connection()).await {
            Ok(_) => {
                tracing::debug!(user_id, planet_id, "Added favorite planet");
                Ok(FavoriteOutcome::Created)
            }
            Err(err) => insert_outcome(err, "Planet"),
        }
    }

    pub async fn remove_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> StoreResult<()> {
        let result = EFavoriteCharacter::delete_many()
            .filter(
                Condition::all()
                    .add(CFavoriteCharacter::UserId.eq(user_id))
                    .add(CFavoriteCharacter::CharacterId.eq(character_id)),
            )
            .exec(self.connection())
            .await?;

        if result.rows_affected == 0 {
            return Err(StoreError::not_found("Favorite"));
        }

        tracing::debug!(user_id, character_id, "Removed favorite character");
        Ok(())
    }

    pub async fn remove_favorite_planet(&self, user_id: i32, planet_id: i32) -> StoreResult<()> {
        let result = EFavoritePlanet::delete_many()
            .filter(
                Condition::all()
                    .add(CFavoritePlanet::UserId.eq(user_id))
                    .add(CFavoritePlanet::PlanetId.eq(planet_id)),
            )
            .exec(self.connection())
            .await?;

        if result.rows_affected == 0 {
            return Err(StoreError::not_found("Favorite"));
        }

        tracing::debug!(user_id, planet_id, "Removed favorite planet");
        Ok(())
    }

    pub async fn get_favorite_character(&self, id: i32) -> StoreResult<MFavoriteCharacter> {
        EFavoriteCharacter::find_by_id(id)
            .one(self.connection())
            .await?
            .ok_or_else(|| StoreError::not_found("Favorite"))
    }

    pub async fn get_favorite_planet(&self, id: i32) -> StoreResult<MFavoritePlanet> {
        EFavoritePlanet::find_by_id(id)
            .one(self.connection())
            .await?
            .ok_or_else(|| StoreError::not_found("Favorite"))
    }

    /// Points an existing favorite row at another user or character.
    pub async fn update_favorite_character(
        &self,
        id: i32,
        user_id: i32,
        character_id: i32,
    ) -> StoreResult<MFavoriteCharacter> {
        let favorite = self.get_favorite_character(id).await?;
        self.get_character(character_id).await?;
        self.get_user(user_id).await?;

        if let Some(other) = self.find_favorite_character(user_id, character_id).await? {
            if other.id != id {
                return Err(StoreError::already_exists("Favorite"));
            }
        }

        let mut afavorite = favorite.clone().into_active_model();
        afavorite.user_id = Set(user_id);
        afavorite.character_id = Set(character_id);

        if !afavorite.is_changed() {
            return Ok(favorite);
        }

        afavorite
            .update(self.connection())
            .await
            .map_err(|err| update_error(err, "Character"))
    }

    /// Points an existing favorite row at another user or planet.
    pub async fn update_favorite_planet(
        &self,
        id: i32,
        user_id: i32,
        planet_id: i32,
    ) -> StoreResult<MFavoritePlanet> {
        let favorite = self.get_favorite_planet(id).await?;
        self.get_planet(planet_id).await?;
        self.get_user(user_id).await?;

        if let Some(other) = self.find_favorite_planet(user_id, planet_id).await? {
            if other.id != id {
                return Err(StoreError::already_exists("Favorite"));
            }
        }

        let mut afavorite = favorite.clone().into_active_model();
        afavorite.user_id = Set(user_id);
        afavorite.planet_id = Set(planet_id);

        if !afavorite.is_changed() {
            return Ok(favorite);
        }

        afavorite
            .update(self.connection())
            .await
            .map_err(|err| update_error(err, "Planet"))
    }

    pub async fn delete_favorite_character(&self, id: i32) -> StoreResult<()> {
        let result = EFavoriteCharacter::delete_by_id(id)
            .exec(self.connection())
            .await?;

        if result.rows_affected == 0 {
            return Err(StoreError::not_found("Favorite"));
        }

        Ok(())
    }

    pub async fn delete_favorite_planet(&self, id: i32) -> StoreResult<()> {
        let result = EFavoritePlanet::delete_by_id(id)
            .exec(self.connection())
            .await?;

        if result.rows_affected == 0 {
            return Err(StoreError::not_found("Favorite"));
        }

        Ok(())
    }

    async fn find_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> StoreResult<Option<MFavoriteCharacter>> {
        let favorite = EFavoriteCharacter::find()
            .filter(
                Condition::all()
                    .add(CFavoriteCharacter::UserId.eq(user_id))
                    .add(CFavoriteCharacter::CharacterId.eq(character_id)),
            )
            .one(self.connection())
            .await?;

        Ok(favorite)
    }

    async fn find_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> StoreResult<Option<MFavoritePlanet>> {
        let favorite = EFavoritePlanet::find()
            .filter(
                Condition::all()
                    .add(CFavoritePlanet::UserId.eq(user_id))
                    .add(CFavoritePlanet::PlanetId.eq(planet_id)),
            )
            .one(self.connection())
            .await?;

        Ok(favorite)
    }
}

/// Maps constraint violations raised by a favorite insert that lost a race.
fn insert_outcome(err: DbErr, target: &str) -> StoreResult<FavoriteOutcome> {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => Ok(FavoriteOutcome::AlreadyExists),
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => Err(StoreError::not_found(target)),
        _ => Err(err.into()),
    }
}

fn update_error(err: DbErr, target: &str) -> StoreError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => StoreError::already_exists("Favorite"),
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => StoreError::not_found(target),
        _ => err.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    async fn store_with_user_and_character() -> (Store, i32, i32) {
        let cli = Cli::parse_from(["holonet-server", "--database-url", "sqlite::memory:"]);
        let store = Store::connect(&cli).await.unwrap();

        let user = AUser {
            email: Set("luke@tatooine.org".to_string()),
            password: Set("not-a-real-hash".to_string()),
            first_name: Set("Luke".to_string()),
            last_name: Set("Skywalker".to_string()),
            subscription_date: Set(chrono::NaiveDate::from_ymd_opt(2025, 5, 4).unwrap()),
            is_active: Set(true),
            ..Default::default()
        }
        .insert(store.connection())
        .await
        .unwrap();

        let character = ACharacter {
            name: Set("Yoda".to_string()),
            ..Default::default()
        }
        .insert(store.connection())
        .await
        .unwrap();

        (store, user.id, character.id)
    }

    fn favorite(user_id: i32, character_id: i32) -> AFavoriteCharacter {
        AFavoriteCharacter {
            user_id: Set(user_id),
            character_id: Set(character_id),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_duplicate_insert_maps_to_already_exists() {
        let (store, user_id, character_id) = store_with_user_and_character().await;

        favorite(user_id, character_id)
            .insert(store.connection())
            .await
            .unwrap();
        let err = favorite(user_id, character_id)
            .insert(store.connection())
            .await
            .unwrap_err();

        assert!(matches!(
            insert_outcome(err, "Character"),
            Ok(FavoriteOutcome::AlreadyExists)
        ));
    }

    #[tokio::test]
    async fn test_dangling_insert_maps_to_not_found() {
        let (store, _user_id, character_id) = store_with_user_and_character().await;

        let err = favorite(999, character_id)
            .insert(store.connection())
            .await
            .unwrap_err();

        assert!(matches!(
            insert_outcome(err, "Character"),
            Err(StoreError::NotFound(resource)) if resource == "Character"
        ));
    }

    #[test]
    fn test_other_errors_pass_through() {
        assert!(matches!(
            insert_outcome(DbErr::Custom("boom".to_string()), "Planet"),
            Err(StoreError::Database(_))
        ));
    }
}
