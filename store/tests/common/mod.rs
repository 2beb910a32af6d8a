/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use chrono::NaiveDate;
use migration::{Migrator, MigratorTrait};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database};
use store::characters::NewCharacter;
use store::database::Store;
use store::planets::NewPlanet;
use store::types::*;

/// Fresh in-memory SQLite store with all migrations applied.
pub async fn create_test_store() -> Store {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opt).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    Store::new(db)
}

/// Inserts a user row directly, skipping password hashing.
pub async fn insert_user(store: &Store, email: &str) -> MUser {
    AUser {
        email: Set(email.to_string()),
        password: Set("not-a-real-hash".to_string()),
        first_name: Set("Test".to_string()),
        last_name: Set("User".to_string()),
        subscription_date: Set(NaiveDate::from_ymd_opt(2025, 5, 4).unwrap()),
        is_active: Set(true),
        ..Default::default()
    }
    .insert(store.connection())
    .await
    .unwrap()
}

pub async fn insert_character(store: &Store, name: &str) -> MCharacter {
    store
        .create_character(NewCharacter {
            name: Some(name.to_string()),
            ..Default::default()
        })
        .await
        .unwrap()
}

pub async fn insert_planet(store: &Store, name: &str) -> MPlanet {
    store
        .create_planet(NewPlanet {
            name: Some(name.to_string()),
            ..Default::default()
        })
        .await
        .unwrap()
}
