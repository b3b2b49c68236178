// src/handlers/inventory.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::i18n::Locale,
    models::inventory::InventoryRow,
};

// GET /api/inventory
#[utoipa::path(
    get,
    path = "/api/inventory",
    tag = "Inventory",
    responses(
        (status = 200, description = "Produtos por nome, com marcação de estoque mínimo", body = Vec<InventoryRow>),
        (status = 502, description = "Falha ao buscar produtos")
    )
)]
pub async fn get_inventory(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let rows = app_state
        .inventory_service
        .get_inventory()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(rows)))
}
