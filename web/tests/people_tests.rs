/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_post_person_with_name_only() {
    let (server, _state) = common::create_test_server().await;

    let res = server.post("/people").json(&json!({"name": "Luke"})).await;

    res.assert_status(StatusCode::CREATED);
    let body: Value = res.json();
    assert_eq!(body["name"], "Luke");
    assert!(body["id"].is_i64());
    assert_eq!(body["gender"], Value::Null);
    assert_eq!(body["birth_year"], Value::Null);
    assert_eq!(body["eye_color"], Value::Null);
    assert!(res.text().contains(r#""gender":null"#));
}

#[tokio::test]
async fn test_create_then_get_person() {
    let (server, _state) = common::create_test_server().await;
    let input = json!({
        "name": "Leia Organa",
        "gender": "female",
        "birth_year": "19BBY",
        "eye_color": "brown"
    });

    let created: Value = server.post("/people").json(&input).await.json();
    let id = created["id"].as_i64().unwrap();

    let res = server.get(&format!("/people/{}", id)).await;
    res.assert_status_ok();

    let mut expected = input.clone();
    expected["id"] = json!(id);
    res.assert_json(&expected);

    let list: Vec<Value> = server.get("/people").await.json();
    assert_eq!(list, vec![expected]);
}

#[tokio::test]
async fn test_post_person_without_name_is_bad_request() {
    let (server, _state) = common::create_test_server().await;

    let res = server.post("/people").json(&json!({"gender": "male"})).await;

    res.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = res.json();
    assert_eq!(body["error"], true);
    assert!(body["message"].as_str().unwrap().contains("name"));

    let list: Vec<Value> = server.get("/people").await.json();
    assert!(list.is_empty());
}

#[tokio::test]
async fn test_post_person_with_invalid_json_is_bad_request() {
    let (server, _state) = common::create_test_server().await;

    let res = server
        .post("/people")
        .content_type("application/json")
        .text("{not json")
        .await;

    res.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = res.json();
    assert_eq!(body["error"], true);
}

#[tokio::test]
async fn test_put_person_updates_only_supplied_fields() {
    let (server, _state) = common::create_test_server().await;
    let created: Value = server
        .post("/people")
        .json(&json!({"name": "Anakin", "gender": "male", "eye_color": "blue"}))
        .await
        .json();
    let id = created["id"].as_i64().unwrap();

    let res = server
        .put(&format!("/people/{}", id))
        .json(&json!({"name": "Darth Vader", "eye_color": "yellow"}))
        .await;

    res.assert_status_ok();
    res.assert_json(&json!({
        "id": id,
        "name": "Darth Vader",
        "gender": "male",
        "birth_year": null,
        "eye_color": "yellow"
    }));
}

#[tokio::test]
async fn test_missing_person_is_not_found() {
    let (server, _state) = common::create_test_server().await;

    let res = server.get("/people/404").await;
    res.assert_status_not_found();
    res.assert_json(&json!({"error": true, "message": "Character not found"}));

    server
        .put("/people/404")
        .json(&json!({"name": "Nobody"}))
        .await
        .assert_status_not_found();
    server.delete("/people/404").await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_then_get_person() {
    let (server, _state) = common::create_test_server().await;
    let created: Value = server
        .post("/people")
        .json(&json!({"name": "Qui-Gon Jinn"}))
        .await
        .json();
    let id = created["id"].as_i64().unwrap();

    let res = server.delete(&format!("/people/{}", id)).await;
    res.assert_status_ok();
    res.assert_json(&json!({"error": false, "message": "Character deleted"}));

    server
        .get(&format!("/people/{}", id))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_non_numeric_id_is_rejected() {
    let (server, _state) = common::create_test_server().await;

    server
        .get("/people/luke")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
