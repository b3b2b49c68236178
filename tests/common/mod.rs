//! Fixtures compartilhadas pelos testes de integração.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use chrono::{DateTime, FixedOffset, Utc};
use rust_decimal::Decimal;
use tower::ServiceExt;
use uuid::Uuid;

use pos_dashboard::{
    config::AppState,
    create_router,
    models::{inventory::Product, operations::Order},
    testing::InMemoryStore,
};

pub fn order(amount: Option<i64>, created_at: DateTime<Utc>) -> Order {
    Order {
        id: Uuid::new_v4(),
        created_at,
        total_amount: amount.map(Decimal::from),
    }
}

pub fn product(name: &str, barcode: Option<&str>, stock_qty: i32, min_stock: i32) -> Product {
    Product {
        id: Uuid::new_v4(),
        name: name.to_string(),
        barcode: barcode.map(str::to_string),
        price: Decimal::new(3500, 2),
        stock_qty,
        min_stock,
    }
}

pub fn app(store: Arc<InMemoryStore>) -> (AppState, Router) {
    let state = AppState::with_store(store, FixedOffset::east_opt(0).unwrap());
    let router = create_router(state.clone());
    (state, router)
}

pub async fn send(router: &Router, request: Request<Body>) -> Response<Body> {
    router.clone().oneshot(request).await.unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
