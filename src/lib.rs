// src/lib.rs

// Painel do PDV: resumo do dia, estoque e catálogo lidos do banco da loja.

use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod testing;

use crate::config::AppState;
use crate::docs::ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .route("/api/dashboard", get(handlers::dashboard::get_dashboard))
        .route("/api/dashboard/refresh", post(handlers::dashboard::refresh_dashboard))
        .route("/api/inventory", get(handlers::inventory::get_inventory))
        .route("/api/products", get(handlers::products::get_catalog))
        .with_state(app_state)
}
