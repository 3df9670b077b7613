//! End-to-end tests: drive the full router against an in-memory database.

use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Request, StatusCode, header};
use http_body_util::BodyExt;
use pos_server::{Config, ServerState, build_router};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn app() -> Router {
    let state = ServerState::in_memory(Config::with_overrides(":memory:", 0))
        .await
        .unwrap();
    build_router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, HeaderMap, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, value)
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, HeaderMap, Value) {
    send(app, "POST", uri, Some(body)).await
}

async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let (status, _, value) = send(app, "PUT", uri, Some(body)).await;
    (status, value)
}

fn id_of(value: &Value) -> i64 {
    value["id"].as_i64().unwrap()
}

/// Menu group + one product at `product_price`, returns (group_id, product_id)
async fn catalogue(app: &Router, product_price: f64) -> (i64, i64) {
    let (_, _, group) = post(app, "/api/menu-groups", json!({ "name": "두마리메뉴" })).await;
    let (_, _, product) = post(
        app,
        "/api/products",
        json!({ "name": "후라이드", "price": product_price }),
    )
    .await;
    (id_of(&group), id_of(&product))
}

async fn menu(app: &Router, price: f64, group_id: i64, product_id: i64) -> (StatusCode, HeaderMap, Value) {
    post(
        app,
        "/api/menus",
        json!({
            "name": "chicken",
            "price": price,
            "menuGroupId": group_id,
            "menuProducts": [{ "productId": product_id, "quantity": 1 }]
        }),
    )
    .await
}

async fn table(app: &Router, empty: bool) -> i64 {
    let (status, _, body) = post(
        app,
        "/api/tables",
        json!({ "numberOfGuests": 0, "empty": empty }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    id_of(&body)
}

async fn order(app: &Router, table_id: i64, menu_id: i64) -> (StatusCode, Value) {
    let (status, _, body) = post(
        app,
        "/api/orders",
        json!({
            "orderTableId": table_id,
            "orderLineItems": [{ "menuId": menu_id, "quantity": 1 }]
        }),
    )
    .await;
    (status, body)
}

async fn set_status(app: &Router, order_id: i64, status: &str) -> (StatusCode, Value) {
    put(
        app,
        &format!("/api/orders/{order_id}/order-status"),
        json!({ "orderStatus": status }),
    )
    .await
}

#[tokio::test]
async fn health_reports_database() {
    let app = app().await;
    let (status, _, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn product_create_returns_location() {
    let app = app().await;
    let (status, headers, body) = post(
        &app,
        "/api/products",
        json!({ "name": "양념치킨", "price": 16000 }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        headers[header::LOCATION],
        format!("/api/products/{}", id_of(&body))
    );
    assert_eq!(body["price"], 16000.0);

    let (status, _, list) = send(&app, "GET", "/api/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn product_negative_price_is_bad_request() {
    let app = app().await;
    let (status, _, body) = post(
        &app,
        "/api/products",
        json!({ "name": "양념치킨", "price": -1 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1002);
    assert_eq!(body["message"], "Product price must be zero or greater.");
}

#[tokio::test]
async fn menu_price_bounded_by_products() {
    let app = app().await;
    let (group_id, product_id) = catalogue(&app, 20000.0).await;

    let (status, headers, body) = menu(&app, 20000.0, group_id, product_id).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(headers.contains_key(header::LOCATION));
    assert_eq!(body["menuProducts"][0]["productId"], product_id);

    let (status, _, body) = menu(&app, 20001.0, group_id, product_id).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2103);

    let (_, _, menus) = send(&app, "GET", "/api/menus", None).await;
    assert_eq!(menus.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn out_of_range_amounts_are_bad_request() {
    let app = app().await;

    let (status, _, body) = post(
        &app,
        "/api/products",
        json!({ "name": "황금올리브", "price": 1e30 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1002);
    assert_eq!(body["message"], "Product price must be zero or greater.");

    let (group_id, product_id) = catalogue(&app, 20000.0).await;
    let (status, _, body) = post(
        &app,
        "/api/menus",
        json!({
            "name": "chicken party",
            "price": 1e30,
            "menuGroupId": group_id,
            "menuProducts": [{ "productId": product_id, "quantity": 1 }]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2102);

    let (status, _, body) = post(
        &app,
        "/api/menus",
        json!({
            "name": "chicken party",
            "price": 20000,
            "menuGroupId": group_id,
            "menuProducts": [{ "productId": product_id, "quantity": 10000 }]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2104);
    assert_eq!(body["message"], "Menu product quantity must be between 1 and 9999.");
    assert_eq!(body["details"]["quantity"], 10000);

    let (_, _, menus) = send(&app, "GET", "/api/menus", None).await;
    assert!(menus.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn grouping_two_free_tables() {
    let app = app().await;
    let a = table(&app, true).await;
    let b = table(&app, true).await;

    let (status, headers, group) = post(
        &app,
        "/api/table-groups",
        json!({ "orderTables": [{ "id": a }, { "id": b }] }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(headers.contains_key(header::LOCATION));

    let group_id = id_of(&group);
    let members = group["orderTables"].as_array().unwrap();
    assert_eq!(members.len(), 2);
    for t in members {
        assert_eq!(t["tableGroupId"], group_id);
        assert_eq!(t["empty"], false);
    }
}

#[tokio::test]
async fn grouping_single_table_fails() {
    let app = app().await;
    let a = table(&app, true).await;

    let (status, _, body) = post(
        &app,
        "/api/table-groups",
        json!({ "orderTables": [{ "id": a }] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Table group must have at least two tables.");
}

#[tokio::test]
async fn order_status_flow() {
    let app = app().await;
    let (group_id, product_id) = catalogue(&app, 16000.0).await;
    let (_, _, created_menu) = menu(&app, 16000.0, group_id, product_id).await;
    let table_id = table(&app, false).await;

    let (status, placed) = order(&app, table_id, id_of(&created_menu)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(placed["orderStatus"], "COOKING");
    let order_id = id_of(&placed);

    let (status, body) = set_status(&app, order_id, "MEAL").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["orderStatus"], "MEAL");

    let (status, _) = set_status(&app, order_id, "COMPLETION").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = set_status(&app, order_id, "MEAL").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Order already completed cannot be changed");
}

#[tokio::test]
async fn order_on_empty_table_fails() {
    let app = app().await;
    let (group_id, product_id) = catalogue(&app, 16000.0).await;
    let (_, _, created_menu) = menu(&app, 16000.0, group_id, product_id).await;
    let table_id = table(&app, true).await;

    let (status, body) = order(&app, table_id, id_of(&created_menu)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Order from empty table is not allowed");
}

#[tokio::test]
async fn ungroup_waits_for_completed_orders() {
    let app = app().await;
    let (group_id, product_id) = catalogue(&app, 16000.0).await;
    let (_, _, created_menu) = menu(&app, 16000.0, group_id, product_id).await;
    let a = table(&app, true).await;
    let b = table(&app, true).await;
    let (_, _, group) = post(
        &app,
        "/api/table-groups",
        json!({ "orderTables": [{ "id": a }, { "id": b }] }),
    )
    .await;
    let table_group_id = id_of(&group);

    let (_, placed) = order(&app, a, id_of(&created_menu)).await;
    let uri = format!("/api/table-groups/{table_group_id}");

    let (status, _, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Cannot ungroup non-completed table.");

    set_status(&app, id_of(&placed), "COMPLETION").await;
    let (status, _, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (_, _, tables) = send(&app, "GET", "/api/tables", None).await;
    for t in tables.as_array().unwrap() {
        assert!(t["tableGroupId"].is_null());
    }
}

#[tokio::test]
async fn table_guest_count_changes() {
    let app = app().await;
    let seated = table(&app, false).await;

    let (status, body) = put(
        &app,
        &format!("/api/tables/{seated}/number-of-guests"),
        json!({ "numberOfGuests": 4 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["numberOfGuests"], 4);

    let (status, body) = put(
        &app,
        &format!("/api/tables/{seated}/empty"),
        json!({ "empty": true }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["empty"], true);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = app().await;
    let (status, _, body) = send(&app, "GET", "/api/unknown", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3);
}
