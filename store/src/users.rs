/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::Utc;
use password_auth::generate_hash;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};
use serde::Deserialize;

use super::database::Store;
use super::error::{StoreError, StoreResult};
use super::input::{require_text, validate_email};
use super::types::*;

#[derive(Deserialize, Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
}

/// Partial user update. A `None` password keeps the stored hash.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct UserPatch {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_active: Option<bool>,
}

impl Store {
    /// All users. The password hash is never serialized.
    pub async fn list_users(&self) -> StoreResult<Vec<MUser>> {
        let users = EUser::find()
            .order_by_asc(CUser::Id)
            .all(self.connection())
            .await?;

        Ok(users)
    }

    pub async fn get_user(&self, id: i32) -> StoreResult<MUser> {
        EUser::find_by_id(id)
            .one(self.connection())
            .await?
            .ok_or_else(|| StoreError::not_found("User"))
    }

    pub async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<MUser>> {
        let user = EUser::find()
            .filter(CUser::Email.eq(email))
            .one(self.connection())
            .await?;

        Ok(user)
    }

    pub async fn create_user(&self, new: NewUser) -> StoreResult<MUser> {
        let email = require_text("email", Some(new.email))?;
        let password = require_text("password", Some(new.password))?;
        let first_name = require_text("first_name", Some(new.first_name))?;
        let last_name = require_text("last_name", Some(new.last_name))?;

        validate_email(&email).map_err(StoreError::Validation)?;

        if self.find_user_by_email(&email).await?.is_some() {
            return Err(StoreError::already_exists("User Email"));
        }

        let user = AUser {
            email: Set(email),
            password: Set(generate_hash(password)),
            first_name: Set(first_name),
            last_name: Set(last_name),
            subscription_date: Set(Utc::now().date_naive()),
            is_active: Set(new.is_active),
            ..Default::default()
        };

        let user = user.insert(self.connection()).await?;
        tracing::debug!(id = user.id, "Created user");

        Ok(user)
    }

    pub async fn update_user(&self, id: i32, patch: UserPatch) -> StoreResult<MUser> {
        let user = self.get_user(id).await?;
        let mut auser = user.clone().into_active_model();

        if let Some(email) = patch.email {
            let email = require_text("email", Some(email))?;
            validate_email(&email).map_err(StoreError::Validation)?;

            match self.find_user_by_email(&email).await? {
                Some(other) if other.id != id => {
                    return Err(StoreError::already_exists("User Email"));
                }
                _ => {}
            }

            auser.email = Set(email);
        }

        if let Some(password) = patch.password {
            let password = require_text("password", Some(password))?;
            auser.password = Set(generate_hash(password));
        }

        if let Some(first_name) = patch.first_name {
            auser.first_name = Set(require_text("first_name", Some(first_name))?);
        }

        if let Some(last_name) = patch.last_name {
            auser.last_name = Set(require_text("last_name", Some(last_name))?);
        }

        if let Some(is_active) = patch.is_active {
            auser.is_active = Set(is_active);
        }

        if !auser.is_changed() {
            return Ok(user);
        }

        Ok(auser.update(self.connection()).await?)
    }

    /// Removes the user together with their favorites.
    pub async fn delete_user(&self, id: i32) -> StoreResult<()> {
        let result = EUser::delete_by_id(id).exec(self.connection()).await?;

        if result.rows_affected == 0 {
            return Err(StoreError::not_found("User"));
        }

        tracing::debug!(id, "Deleted user");
        Ok(())
    }
}
