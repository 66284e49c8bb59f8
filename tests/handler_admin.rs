mod common;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use common::*;
use serde_json::{Value, json};
use std::sync::Arc;
use train_booking::auth::Role;

async fn admin_server() -> (Arc<MemoryStore>, TestServer, (HeaderName, HeaderValue)) {
    let store = MemoryStore::new();
    let token = admin_token(&store).await;
    let server = test_server(&store);
    (store, server, bearer(&token))
}

async fn create_train(
    server: &TestServer,
    auth: &(HeaderName, HeaderValue),
    code: &str,
) -> i64 {
    let response = server
        .post("/api/v1/admin/trains")
        .add_header(auth.0.clone(), auth.1.clone())
        .json(&json!({ "code": code, "name": "Argo Bromo", "class": "executive" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_station_crud() {
    let (_store, server, (name, value)) = admin_server().await;

    let response = server
        .post("/api/v1/admin/stations")
        .add_header(name.clone(), value.clone())
        .json(&json!({ "code": "gmr", "name": "Gambir", "city": "Jakarta" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let created = response.json::<Value>();
    assert_eq!(created["code"], "GMR");
    let id = created["id"].as_i64().unwrap();

    let response = server
        .get(&format!("/api/v1/admin/stations/{id}"))
        .add_header(name.clone(), value.clone())
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["name"], "Gambir");

    let response = server
        .put(&format!("/api/v1/admin/stations/{id}"))
        .add_header(name.clone(), value.clone())
        .json(&json!({ "code": "GMR", "name": "Gambir Central", "city": "Jakarta" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["name"], "Gambir Central");

    let list = server
        .get("/api/v1/admin/stations")
        .add_header(name.clone(), value.clone())
        .await
        .json::<Value>();
    assert_eq!(list["items"].as_array().unwrap().len(), 1);

    server
        .delete(&format!("/api/v1/admin/stations/{id}"))
        .add_header(name.clone(), value.clone())
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let response = server
        .get(&format!("/api/v1/admin/stations/{id}"))
        .add_header(name, value)
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body = response.json::<Value>();
    assert_eq!(body["statusCode"], 404);
    assert_eq!(body["message"], "Not Found");
}

#[tokio::test]
async fn test_station_duplicate_code() {
    let (_store, server, (name, value)) = admin_server().await;
    let station = json!({ "code": "BD", "name": "Bandung", "city": "Bandung" });

    server
        .post("/api/v1/admin/stations")
        .add_header(name.clone(), value.clone())
        .json(&station)
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/api/v1/admin/stations")
        .add_header(name, value)
        .json(&json!({ "code": "bd", "name": "Bandung Hall", "city": "Bandung" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["statusCode"], 409);
}

#[tokio::test]
async fn test_station_validation() {
    let (_store, server, (name, value)) = admin_server().await;

    let response = server
        .post("/api/v1/admin/stations")
        .add_header(name, value)
        .json(&json!({ "code": "", "name": "Nowhere", "city": "Nowhere" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_station_non_numeric_id() {
    let (_store, server, (name, value)) = admin_server().await;

    let response = server
        .get("/api/v1/admin/stations/abc")
        .add_header(name, value)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["statusCode"], 400);
}

#[tokio::test]
async fn test_delete_missing_station() {
    let (_store, server, (name, value)) = admin_server().await;

    server
        .delete("/api/v1/admin/stations/4242")
        .add_header(name, value)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_train_crud() {
    let (_store, server, auth) = admin_server().await;
    let id = create_train(&server, &auth, "ko7").await;
    let (name, value) = auth;

    let response = server
        .get(&format!("/api/v1/admin/trains/{id}"))
        .add_header(name.clone(), value.clone())
        .await;
    response.assert_status_ok();
    let train = response.json::<Value>();
    assert_eq!(train["code"], "KO7");
    assert_eq!(train["class"], "executive");

    let response = server
        .put(&format!("/api/v1/admin/trains/{id}"))
        .add_header(name.clone(), value.clone())
        .json(&json!({ "code": "KO7", "name": "Argo Bromo Anggrek", "class": "business" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["class"], "business");

    server
        .delete(&format!("/api/v1/admin/trains/{id}"))
        .add_header(name.clone(), value.clone())
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/api/v1/admin/trains/{id}"))
        .add_header(name, value)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_train_unknown_class() {
    let (_store, server, (name, value)) = admin_server().await;

    let response = server
        .post("/api/v1/admin/trains")
        .add_header(name, value)
        .json(&json!({ "code": "X1", "name": "Ghost", "class": "first" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_train_with_carriages_cannot_be_deleted() {
    let (_store, server, auth) = admin_server().await;
    let train_id = create_train(&server, &auth, "T1").await;
    let (name, value) = auth;

    server
        .post("/api/v1/admin/train-carriages")
        .add_header(name.clone(), value.clone())
        .json(&json!({ "train_id": train_id, "carriage_number": 1, "seat_capacity": 50 }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .delete(&format!("/api/v1/admin/trains/{train_id}"))
        .add_header(name, value)
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_carriage_crud_and_filter() {
    let (_store, server, auth) = admin_server().await;
    let first = create_train(&server, &auth, "T1").await;
    let second = create_train(&server, &auth, "T2").await;
    let (name, value) = auth;

    for (train_id, number) in [(first, 1), (first, 2), (second, 1)] {
        server
            .post("/api/v1/admin/train-carriages")
            .add_header(name.clone(), value.clone())
            .json(&json!({ "train_id": train_id, "carriage_number": number, "seat_capacity": 80 }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let all = server
        .get("/api/v1/admin/train-carriages")
        .add_header(name.clone(), value.clone())
        .await
        .json::<Value>();
    assert_eq!(all["items"].as_array().unwrap().len(), 3);

    let filtered = server
        .get("/api/v1/admin/train-carriages")
        .add_query_param("train_id", first)
        .add_header(name.clone(), value.clone())
        .await
        .json::<Value>();
    let items = filtered["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|c| c["train_id"] == first));

    let id = items[0]["id"].as_i64().unwrap();
    let response = server
        .put(&format!("/api/v1/admin/train-carriages/{id}"))
        .add_header(name.clone(), value.clone())
        .json(&json!({ "train_id": first, "carriage_number": 1, "seat_capacity": 64 }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["seat_capacity"], 64);

    server
        .delete(&format!("/api/v1/admin/train-carriages/{id}"))
        .add_header(name.clone(), value.clone())
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/api/v1/admin/train-carriages/{id}"))
        .add_header(name, value)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_carriage_for_unknown_train() {
    let (_store, server, (name, value)) = admin_server().await;

    let response = server
        .post("/api/v1/admin/train-carriages")
        .add_header(name, value)
        .json(&json!({ "train_id": 9999, "carriage_number": 1, "seat_capacity": 50 }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["errors"], "train 9999 not found");
}

#[tokio::test]
async fn test_carriage_duplicate_number() {
    let (_store, server, auth) = admin_server().await;
    let train_id = create_train(&server, &auth, "T1").await;
    let (name, value) = auth;
    let carriage = json!({ "train_id": train_id, "carriage_number": 3, "seat_capacity": 50 });

    server
        .post("/api/v1/admin/train-carriages")
        .add_header(name.clone(), value.clone())
        .json(&carriage)
        .await
        .assert_status(StatusCode::CREATED);

    server
        .post("/api/v1/admin/train-carriages")
        .add_header(name, value)
        .json(&carriage)
        .await
        .assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_carriage_zero_capacity() {
    let (_store, server, auth) = admin_server().await;
    let train_id = create_train(&server, &auth, "T1").await;
    let (name, value) = auth;

    server
        .post("/api/v1/admin/train-carriages")
        .add_header(name, value)
        .json(&json!({ "train_id": train_id, "carriage_number": 1, "seat_capacity": 0 }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_users_and_promote() {
    let (store, server, (name, value)) = admin_server().await;
    let user = seed_user(&store, "ada@example.com", Role::User).await;

    let list = server
        .get("/api/v1/admin/users")
        .add_header(name.clone(), value.clone())
        .await
        .json::<Value>();
    let items = list["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|u| u.get("password_hash").is_none()));

    let response = server
        .put(&format!("/api/v1/admin/users/{}/role", user.id))
        .add_header(name, value)
        .json(&json!({ "role": "admin" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["role"], "admin");

    // The old credential keeps its role until it expires.
    let (name, value) = bearer(&token_for(user.id, Role::User));
    server
        .get("/api/v1/admin/users")
        .add_header(name, value)
        .await
        .assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_set_role_unknown_user() {
    let (_store, server, (name, value)) = admin_server().await;

    server
        .put("/api/v1/admin/users/777/role")
        .add_header(name, value)
        .json(&json!({ "role": "user" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_set_role_rejects_unknown_role() {
    let (store, server, (name, value)) = admin_server().await;
    let user = seed_user(&store, "ada@example.com", Role::User).await;

    server
        .put(&format!("/api/v1/admin/users/{}/role", user.id))
        .add_header(name, value)
        .json(&json!({ "role": "superuser" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
