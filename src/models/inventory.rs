// src/models/inventory.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Produto (tabela 'products') ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub barcode: Option<String>,
    pub price: Decimal,
    pub stock_qty: i32,
    pub min_stock: i32,
}

impl Product {
    /// Regra das telas de estoque: compara com o mínimo do próprio produto.
    pub fn is_at_or_below_min_stock(&self) -> bool {
        self.stock_qty <= self.min_stock
    }
}

// Ordenação pedida ao banco. A ordenação nunca é feita em memória.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductOrder {
    #[default]
    Natural,
    NameAsc,
}

// --- Linha da tela de Estoque ---
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRow {
    pub id: Uuid,
    pub name: String,
    pub barcode: Option<String>,
    pub price: Decimal,
    pub stock_qty: i32,
    pub min_stock: i32,
    pub low_stock: bool,
}

impl From<Product> for InventoryRow {
    fn from(product: Product) -> Self {
        let low_stock = product.is_at_or_below_min_stock();
        Self {
            id: product.id,
            name: product.name,
            barcode: product.barcode,
            price: product.price,
            stock_qty: product.stock_qty,
            min_stock: product.min_stock,
            low_stock,
        }
    }
}
