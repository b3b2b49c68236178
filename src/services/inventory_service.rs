// src/services/inventory_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::DataStore,
    models::inventory::{InventoryRow, Product, ProductOrder},
};

#[derive(Clone)]
pub struct InventoryService {
    store: Arc<dyn DataStore>,
}

impl InventoryService {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }

    // Tela de Estoque: sempre por nome, com a marcação de estoque mínimo.
    pub async fn get_inventory(&self) -> Result<Vec<InventoryRow>, AppError> {
        let products = self.store.fetch_products(ProductOrder::NameAsc).await?;
        Ok(products.into_iter().map(InventoryRow::from).collect())
    }

    // Catálogo: a ordenação é opcional e fica a cargo do banco.
    pub async fn get_catalog(&self, order: ProductOrder) -> Result<Vec<Product>, AppError> {
        self.store.fetch_products(order).await
    }
}
