// src/handlers/products.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::i18n::Locale,
    models::inventory::{Product, ProductOrder},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSort {
    Name,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CatalogQuery {
    /// `name` ordena por nome; ausente mantém a ordem do banco.
    pub sort: Option<CatalogSort>,
}

impl CatalogQuery {
    pub fn product_order(&self) -> ProductOrder {
        match self.sort {
            Some(CatalogSort::Name) => ProductOrder::NameAsc,
            None => ProductOrder::Natural,
        }
    }
}

// GET /api/products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Catalog",
    params(CatalogQuery),
    responses(
        (status = 200, description = "Catálogo de produtos", body = Vec<Product>),
        (status = 400, description = "Valor de `sort` desconhecido"),
        (status = 502, description = "Falha ao buscar produtos")
    )
)]
pub async fn get_catalog(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<CatalogQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let products = app_state
        .inventory_service
        .get_catalog(query.product_order())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(products)))
}
