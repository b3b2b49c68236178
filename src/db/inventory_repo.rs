// src/db/inventory_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::inventory::{Product, ProductOrder},
};

// Colunas numéricas nulas são lidas como zero (mesmo comportamento da tela antiga).
const SELECT_PRODUCTS: &str = r#"
    SELECT
        id,
        name,
        barcode,
        COALESCE(price, 0) AS price,
        COALESCE(stock_qty, 0)::int4 AS stock_qty,
        COALESCE(min_stock, 0)::int4 AS min_stock
    FROM products
"#;

#[derive(Clone)]
pub struct InventoryRepository {
    pool: PgPool,
}

impl InventoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_all_products(&self, order: ProductOrder) -> Result<Vec<Product>, AppError> {
        let sql = match order {
            ProductOrder::Natural => SELECT_PRODUCTS.to_string(),
            ProductOrder::NameAsc => format!("{SELECT_PRODUCTS} ORDER BY name ASC"),
        };

        let products = sqlx::query_as::<_, Product>(sql.as_str())
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }
}
