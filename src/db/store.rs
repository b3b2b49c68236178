// src/db/store.rs

// Ponto de troca entre o banco real e implementações em memória (testes).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::{InventoryRepository, OperationsRepository},
    models::{
        inventory::{Product, ProductOrder},
        operations::Order,
    },
};

// Leituras que as telas fazem no banco externo.
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Pedidos criados em `[start, end)`.
    async fn fetch_orders(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Order>, AppError>;

    async fn fetch_products(&self, order: ProductOrder) -> Result<Vec<Product>, AppError>;
}

#[derive(Clone)]
pub struct PgDataStore {
    operations_repo: OperationsRepository,
    inventory_repo: InventoryRepository,
}

impl PgDataStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            operations_repo: OperationsRepository::new(pool.clone()),
            inventory_repo: InventoryRepository::new(pool),
        }
    }
}

#[async_trait]
impl DataStore for PgDataStore {
    async fn fetch_orders(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Order>, AppError> {
        self.operations_repo.get_orders_between(start, end).await
    }

    async fn fetch_products(&self, order: ProductOrder) -> Result<Vec<Product>, AppError> {
        self.inventory_repo.get_all_products(order).await
    }
}
