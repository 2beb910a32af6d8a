/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_list_users_without_password() {
    let (server, state) = common::create_test_server().await;
    let user = common::insert_user(&state, "luke@tatooine.org").await;

    let res = server.get("/users").await;

    res.assert_status_ok();
    assert!(!res.text().contains("password"));
    assert!(!res.text().contains("argon2"));
    res.assert_json(&json!([{
        "id": user.id,
        "email": "luke@tatooine.org",
        "first_name": "Test",
        "last_name": "User",
        "subscription_date": "2025-05-04",
        "is_active": true
    }]));
}

#[tokio::test]
async fn test_user_favorites_shape() {
    let (server, state) = common::create_test_server().await;
    let user = common::insert_user(&state, "luke@tatooine.org").await;
    common::insert_planet_with_id(&state, 5, "Dagobah").await;
    common::insert_character_with_id(&state, 7, "Yoda").await;

    server
        .post(&format!("/users/{}/favorite/planet/5", user.id))
        .await
        .assert_status(StatusCode::CREATED);
    server
        .post(&format!("/users/{}/favorite/people/7", user.id))
        .await
        .assert_status(StatusCode::CREATED);

    let res = server.get(&format!("/users/{}/favorites", user.id)).await;
    res.assert_status_ok();

    let body: Value = res.json();
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 2);

    let planets = body["planets"].as_array().unwrap();
    assert_eq!(planets.len(), 1);
    assert!(planets[0]["id"].is_i64());
    assert_eq!(planets[0]["user_id"], json!(user.id));
    assert_eq!(planets[0]["planet_id"], json!(5));
    assert_eq!(planets[0].as_object().unwrap().len(), 3);

    let characters = body["characters"].as_array().unwrap();
    assert_eq!(characters.len(), 1);
    assert!(characters[0]["id"].is_i64());
    assert_eq!(characters[0]["user_id"], json!(user.id));
    assert_eq!(characters[0]["character_id"], json!(7));
    assert_eq!(characters[0].as_object().unwrap().len(), 3);
}

#[tokio::test]
async fn test_favorites_of_missing_user_is_not_found() {
    let (server, _state) = common::create_test_server().await;

    let res = server.get("/users/12/favorites").await;

    res.assert_status_not_found();
    res.assert_json(&json!({"error": true, "message": "User not found"}));
}

#[tokio::test]
async fn test_add_favorite_twice_reports_success() {
    let (server, state) = common::create_test_server().await;
    let user = common::insert_user(&state, "luke@tatooine.org").await;
    common::insert_character_with_id(&state, 7, "Yoda").await;
    let path = format!("/users/{}/favorite/people/7", user.id);

    let first = server.post(&path).await;
    first.assert_status(StatusCode::CREATED);
    first.assert_json(&json!({"error": false, "message": "Character favorite added"}));

    let second = server.post(&path).await;
    second.assert_status_ok();
    second.assert_json(&json!({"error": false, "message": "Character already in favorites"}));

    let favorites: Value = server
        .get(&format!("/users/{}/favorites", user.id))
        .await
        .json();
    assert_eq!(favorites["characters"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_favorite_planet_twice_reports_success() {
    let (server, state) = common::create_test_server().await;
    let user = common::insert_user(&state, "luke@tatooine.org").await;
    common::insert_planet_with_id(&state, 5, "Dagobah").await;
    let path = format!("/users/{}/favorite/planet/5", user.id);

    server.post(&path).await.assert_status(StatusCode::CREATED);

    let second = server.post(&path).await;
    second.assert_status_ok();
    second.assert_json(&json!({"error": false, "message": "Planet already in favorites"}));

    let favorites: Value = server
        .get(&format!("/users/{}/favorites", user.id))
        .await
        .json();
    assert_eq!(favorites["planets"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_favorite_for_missing_target_is_not_found() {
    let (server, state) = common::create_test_server().await;
    let user = common::insert_user(&state, "luke@tatooine.org").await;

    let res = server
        .post(&format!("/users/{}/favorite/people/99", user.id))
        .await;
    res.assert_status_not_found();
    res.assert_json(&json!({"error": true, "message": "Character not found"}));

    let res = server
        .post(&format!("/users/{}/favorite/planet/99", user.id))
        .await;
    res.assert_status_not_found();
    res.assert_json(&json!({"error": true, "message": "Planet not found"}));
}

#[tokio::test]
async fn test_remove_favorites() {
    let (server, state) = common::create_test_server().await;
    let user = common::insert_user(&state, "luke@tatooine.org").await;
    common::insert_planet_with_id(&state, 5, "Dagobah").await;
    common::insert_character_with_id(&state, 7, "Yoda").await;

    let planet_path = format!("/users/{}/favorite/planet/5", user.id);
    let person_path = format!("/users/{}/favorite/people/7", user.id);

    server.delete(&planet_path).await.assert_status_not_found();
    server.delete(&person_path).await.assert_status_not_found();

    server.post(&planet_path).await;
    server.post(&person_path).await;

    let res = server.delete(&planet_path).await;
    res.assert_status_ok();
    res.assert_json(&json!({"error": false, "message": "Planet favorite removed"}));

    let res = server.delete(&person_path).await;
    res.assert_status_ok();
    res.assert_json(&json!({"error": false, "message": "Character favorite removed"}));

    let res = server.delete(&person_path).await;
    res.assert_status_not_found();
    res.assert_json(&json!({"error": true, "message": "Favorite not found"}));

    server
        .get(&format!("/users/{}/favorites", user.id))
        .await
        .assert_json(&json!({"planets": [], "characters": []}));
}

#[tokio::test]
async fn test_deleting_person_removes_favorites() {
    let (server, state) = common::create_test_server().await;
    let user = common::insert_user(&state, "luke@tatooine.org").await;
    common::insert_character_with_id(&state, 7, "Yoda").await;

    server
        .post(&format!("/users/{}/favorite/people/7", user.id))
        .await
        .assert_status(StatusCode::CREATED);
    server.delete("/people/7").await.assert_status_ok();

    server
        .get(&format!("/users/{}/favorites", user.id))
        .await
        .assert_json(&json!({"planets": [], "characters": []}));
}
