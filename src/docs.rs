// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Dashboard ---
        handlers::dashboard::get_dashboard,
        handlers::dashboard::refresh_dashboard,

        // --- Inventory ---
        handlers::inventory::get_inventory,

        // --- Catalog ---
        handlers::products::get_catalog,
    ),
    components(
        schemas(
            models::dashboard::DailyStats,
            models::dashboard::DashboardState,
            models::inventory::Product,
            models::inventory::InventoryRow,
            models::operations::Order,
            handlers::products::CatalogSort,
        )
    ),
    tags(
        (name = "Dashboard", description = "Resumo diário da loja"),
        (name = "Inventory", description = "Estoque por produto"),
        (name = "Catalog", description = "Catálogo de produtos"),
    )
)]
pub struct ApiDoc;
