//! HTTP-level integration tests for in-store and online orders.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, delete_auth, get_auth, patch_json_auth, post_json, post_json_auth,
};
use restaurant_db::models::category::CreateCategory;
use restaurant_db::models::customer::{CreateCustomer, Customer};
use restaurant_db::models::menu_item::{CreateMenuItem, MenuItem};
use restaurant_db::repositories::{CategoryRepo, CustomerRepo, MenuItemRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Seed one category with a $10.00 burger and a $5.50 soda.
async fn seed_menu(pool: &PgPool) -> (MenuItem, MenuItem) {
    let category = CategoryRepo::create(
        pool,
        &CreateCategory {
            name: "Mains".to_string(),
            description: String::new(),
        },
    )
    .await
    .expect("category creation should succeed");

    let mut items = Vec::new();
    for (name, price) in [("Burger", "$10.00"), ("Soda", "$5.50")] {
        let item = MenuItemRepo::create(
            pool,
            &CreateMenuItem {
                name: name.to_string(),
                description: String::new(),
                price: price.to_string(),
                category_id: category.id,
            },
        )
        .await
        .expect("menu item creation should succeed");
        items.push(item);
    }

    let soda = items.pop().unwrap();
    let burger = items.pop().unwrap();
    (burger, soda)
}

async fn seed_customer(pool: &PgPool) -> Customer {
    CustomerRepo::create(
        pool,
        &CreateCustomer {
            name: "Ada Diner".to_string(),
            email: "ada@example.com".to_string(),
            phone: "(555) 555-0100".to_string(),
        },
    )
    .await
    .expect("customer creation should succeed")
}

// ---------------------------------------------------------------------------
// Store orders
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_store_order_merges_duplicates(pool: PgPool) {
    let (burger, soda) = seed_menu(&pool).await;
    let token = admin_token(&pool, "staff@example.com", "STAFF").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "order_items": [
            { "menu_item_id": burger.id, "quantity": 1 },
            { "menu_item_id": soda.id, "quantity": 1 },
            { "menu_item_id": soda.id, "quantity": 2 },
        ]
    });
    let response = post_json_auth(app, "/api/v1/admin/store-orders", body, &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let order = &json["data"];
    assert_eq!(order["menu_item_ids"], serde_json::json!([burger.id, soda.id]));
    assert_eq!(order["item_quantities"], serde_json::json!([1, 3]));
    assert_eq!(order["total_price"], "26.50");
    assert_eq!(order["total_items"], 4);
    assert_eq!(order["payment_status"], "UNPAID");
    assert_eq!(order["order_status"], "PROCESSING");

    let number = order["order_number"].as_i64().unwrap();
    assert!((10_000_000..=99_999_999).contains(&number));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_store_order_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "order_items": [{ "menu_item_id": 1, "quantity": 1 }] });

    let response = post_json(app, "/api/v1/admin/store-orders", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_store_order_with_unknown_item_returns_404(pool: PgPool) {
    let (burger, _) = seed_menu(&pool).await;
    let token = admin_token(&pool, "staff@example.com", "STAFF").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "order_items": [
            { "menu_item_id": burger.id, "quantity": 1 },
            { "menu_item_id": 999_999, "quantity": 1 },
        ]
    });
    let response = post_json_auth(app, "/api/v1/admin/store-orders", body, &token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Menu item not found: 999999");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_store_order_with_no_items_is_rejected(pool: PgPool) {
    let token = admin_token(&pool, "staff@example.com", "STAFF").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/admin/store-orders",
        serde_json::json!({ "order_items": [] }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "`order_items` must be an array with at least one item"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_store_order_without_quantity_is_rejected(pool: PgPool) {
    let (burger, _) = seed_menu(&pool).await;
    let token = admin_token(&pool, "staff@example.com", "STAFF").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "order_items": [{ "menu_item_id": burger.id }] });
    let response = post_json_auth(app, "/api/v1/admin/store-orders", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Please provide `quantity`");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_negative_line_cannot_reduce_a_duplicate(pool: PgPool) {
    let (burger, _) = seed_menu(&pool).await;
    let token = admin_token(&pool, "staff@example.com", "STAFF").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "order_items": [
            { "menu_item_id": burger.id, "quantity": 5 },
            { "menu_item_id": burger.id, "quantity": -4 },
        ]
    });
    let response = post_json_auth(app, "/api/v1/admin/store-orders", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "`quantity` must be at least 1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_store_order_total_beyond_storable_limit_is_rejected(pool: PgPool) {
    let (burger, _) = seed_menu(&pool).await;
    let token = admin_token(&pool, "staff@example.com", "STAFF").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "order_items": [{ "menu_item_id": burger.id, "quantity": 10_000_000 }]
    });
    let response = post_json_auth(app, "/api/v1/admin/store-orders", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Order total must not exceed 99999999.99");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_store_order_items_drops_unknown_ids(pool: PgPool) {
    let (burger, soda) = seed_menu(&pool).await;
    let token = admin_token(&pool, "staff@example.com", "STAFF").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "order_items": [{ "menu_item_id": burger.id, "quantity": 1 }] });
    let created = body_json(post_json_auth(app, "/api/v1/admin/store-orders", body, &token).await).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "order_items": [
            { "menu_item_id": soda.id, "quantity": 2 },
            { "menu_item_id": 999_999, "quantity": 5 },
        ]
    });
    let response = patch_json_auth(
        app,
        &format!("/api/v1/admin/store-orders/{id}"),
        body,
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["menu_item_ids"], serde_json::json!([soda.id]));
    assert_eq!(json["data"]["total_price"], "11.00");
    assert_eq!(json["data"]["total_items"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_store_order_status_and_lookup_by_number(pool: PgPool) {
    let (burger, _) = seed_menu(&pool).await;
    let token = admin_token(&pool, "manager@example.com", "MANAGER").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "order_items": [{ "menu_item_id": burger.id, "quantity": 2 }] });
    let created = body_json(post_json_auth(app, "/api/v1/admin/store-orders", body, &token).await).await;
    let id = created["data"]["id"].as_i64().unwrap();
    let number = created["data"]["order_number"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/api/v1/admin/store-orders/{id}/status"),
        serde_json::json!({ "order_status": "COMPLETED", "payment_status": "PAID" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["order_status"], "COMPLETED");
    assert_eq!(json["data"]["payment_status"], "PAID");

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/v1/admin/store-orders/number/{number}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["id"], id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_order_number_returns_404(pool: PgPool) {
    let token = admin_token(&pool, "staff@example.com", "STAFF").await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/admin/store-orders/number/12345678", &token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_staff_cannot_delete_store_order(pool: PgPool) {
    let (burger, _) = seed_menu(&pool).await;
    let staff = admin_token(&pool, "staff@example.com", "STAFF").await;
    let admin = admin_token(&pool, "admin@example.com", "ADMIN").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "order_items": [{ "menu_item_id": burger.id, "quantity": 1 }] });
    let created = body_json(post_json_auth(app, "/api/v1/admin/store-orders", body, &staff).await).await;
    let uri = format!("/api/v1/admin/store-orders/{}", created["data"]["id"]);

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &uri, &staff).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &uri, &admin).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get_auth(app, &uri, &admin).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Online orders
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_online_order_is_public(pool: PgPool) {
    let (burger, soda) = seed_menu(&pool).await;
    let customer = seed_customer(&pool).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "customer_id": customer.id,
        "order_items": [
            { "menu_item_id": soda.id, "quantity": 2 },
            { "menu_item_id": burger.id, "quantity": 1 },
        ]
    });
    let response = post_json(app, "/api/v1/online-orders", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["customer_id"], customer.id);
    assert_eq!(json["data"]["menu_item_ids"], serde_json::json!([soda.id, burger.id]));
    assert_eq!(json["data"]["total_price"], "21.00");
    assert_eq!(json["data"]["customer"]["email"], "ada@example.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_online_order_for_unknown_customer_returns_404(pool: PgPool) {
    let (burger, _) = seed_menu(&pool).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "customer_id": 999_999,
        "order_items": [{ "menu_item_id": burger.id, "quantity": 1 }]
    });
    let response = post_json(app, "/api/v1/online-orders", body).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_online_orders_filters_by_customer(pool: PgPool) {
    let (burger, _) = seed_menu(&pool).await;
    let customer = seed_customer(&pool).await;
    let token = admin_token(&pool, "staff@example.com", "STAFF").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "customer_id": customer.id,
        "order_items": [{ "menu_item_id": burger.id, "quantity": 1 }]
    });
    let response = post_json(app, "/api/v1/online-orders", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(
        app,
        &format!("/api/v1/admin/online-orders?customer_id={}", customer.id),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["pagination"]["total_count"], 1);
    assert_eq!(json["data"][0]["customer"]["id"], customer.id);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/online-orders?customer_id=999999", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["pagination"]["total_count"], 0);
}

async fn create_online_order(pool: &PgPool, customer_id: i64, menu_item_id: i64) -> i64 {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "customer_id": customer_id,
        "order_items": [{ "menu_item_id": menu_item_id, "quantity": 1 }]
    });
    let response = post_json(app, "/api/v1/online-orders", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_online_order_items_recomputes_and_drops_unknown_ids(pool: PgPool) {
    let (burger, soda) = seed_menu(&pool).await;
    let customer = seed_customer(&pool).await;
    let token = admin_token(&pool, "staff@example.com", "STAFF").await;
    let id = create_online_order(&pool, customer.id, burger.id).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "order_items": [
            { "menu_item_id": soda.id, "quantity": 1 },
            { "menu_item_id": 999_999, "quantity": 3 },
            { "menu_item_id": burger.id, "quantity": 2 },
            { "menu_item_id": soda.id, "quantity": 1 },
        ]
    });
    let response = patch_json_auth(
        app,
        &format!("/api/v1/admin/online-orders/{id}"),
        body,
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["menu_item_ids"], serde_json::json!([soda.id, burger.id]));
    assert_eq!(json["data"]["item_quantities"], serde_json::json!([2, 2]));
    assert_eq!(json["data"]["total_price"], "31.00");
    assert_eq!(json["data"]["total_items"], 4);
    assert_eq!(json["data"]["customer"]["id"], customer.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_online_order_rejects_negative_quantity_on_unknown_item(pool: PgPool) {
    let (burger, _) = seed_menu(&pool).await;
    let customer = seed_customer(&pool).await;
    let token = admin_token(&pool, "staff@example.com", "STAFF").await;
    let id = create_online_order(&pool, customer.id, burger.id).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "order_items": [
            { "menu_item_id": burger.id, "quantity": 1 },
            { "menu_item_id": 999_999, "quantity": -7 },
        ]
    });
    let response = patch_json_auth(
        app,
        &format!("/api/v1/admin/online-orders/{id}"),
        body,
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "`quantity` must be at least 1"
    );

    // The stored order is untouched.
    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/admin/online-orders/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["total_price"], "10.00");
}
