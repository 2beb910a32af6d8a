/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_create_then_get_planet() {
    let (server, _state) = common::create_test_server().await;
    let input = json!({
        "name": "Tatooine",
        "climate": "arid",
        "population": 200000,
        "terrain": "desert"
    });

    let res = server.post("/planets").json(&input).await;
    res.assert_status(StatusCode::CREATED);
    let created: Value = res.json();
    let id = created["id"].as_i64().unwrap();

    let mut expected = input.clone();
    expected["id"] = json!(id);
    assert_eq!(created, expected);

    server
        .get(&format!("/planets/{}", id))
        .await
        .assert_json(&expected);
}

#[tokio::test]
async fn test_post_planet_rejects_non_integer_population() {
    let (server, _state) = common::create_test_server().await;

    let res = server
        .post("/planets")
        .json(&json!({"name": "Kamino", "population": "lots"}))
        .await;

    res.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_put_planet_clears_field_with_null() {
    let (server, _state) = common::create_test_server().await;
    let created: Value = server
        .post("/planets")
        .json(&json!({"name": "Alderaan", "population": 2000000000, "climate": "temperate"}))
        .await
        .json();
    let id = created["id"].as_i64().unwrap();

    let res = server
        .put(&format!("/planets/{}", id))
        .json(&json!({"population": null}))
        .await;

    res.assert_status_ok();
    let body: Value = res.json();
    assert_eq!(body["name"], "Alderaan");
    assert_eq!(body["climate"], "temperate");
    assert_eq!(body["population"], Value::Null);
}

#[tokio::test]
async fn test_delete_then_get_planet() {
    let (server, _state) = common::create_test_server().await;
    let created: Value = server
        .post("/planets")
        .json(&json!({"name": "Hoth"}))
        .await
        .json();
    let id = created["id"].as_i64().unwrap();

    let res = server.delete(&format!("/planets/{}", id)).await;
    res.assert_status_ok();
    res.assert_json(&json!({"error": false, "message": "Planet deleted"}));

    let res = server.get(&format!("/planets/{}", id)).await;
    res.assert_status_not_found();
    res.assert_json(&json!({"error": true, "message": "Planet not found"}));

    server
        .delete(&format!("/planets/{}", id))
        .await
        .assert_status_not_found();
}
