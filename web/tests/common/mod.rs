/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use axum_test::TestServer;
use chrono::NaiveDate;
use migration::{Migrator, MigratorTrait};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database};
use std::sync::Arc;
use store::database::Store;
use store::types::*;

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 3000,
        database_url: Some("sqlite::memory:".to_string()),
        database_url_file: None,
        admin_name: "Holonet Admin".to_string(),
        state_file: None,
    }
}

pub async fn create_test_state() -> Arc<ServerState> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opt).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    Arc::new(ServerState {
        store: Store::new(db),
        cli: create_mock_cli(),
    })
}

pub async fn create_test_server() -> (TestServer, Arc<ServerState>) {
    let state = create_test_state().await;
    let server = TestServer::new(web::create_router(Arc::clone(&state))).unwrap();

    (server, state)
}

pub async fn insert_user(state: &ServerState, email: &str) -> MUser {
    AUser {
        email: Set(email.to_string()),
        password: Set("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string()),
        first_name: Set("Test".to_string()),
        last_name: Set("User".to_string()),
        subscription_date: Set(NaiveDate::from_ymd_opt(2025, 5, 4).unwrap()),
        is_active: Set(true),
        ..Default::default()
    }
    .insert(state.store.connection())
    .await
    .unwrap()
}

pub async fn insert_planet_with_id(state: &ServerState, id: i32, name: &str) -> MPlanet {
    APlanet {
        id: Set(id),
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(state.store.connection())
    .await
    .unwrap()
}

pub async fn insert_character_with_id(state: &ServerState, id: i32, name: &str) -> MCharacter {
    ACharacter {
        id: Set(id),
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(state.store.connection())
    .await
    .unwrap()
}
