// src/testing.rs

// DataStore em memória para os testes: filtra pedidos pela janela e ordena
// produtos por nome quando pedido. Falhas podem ser ligadas por coleção.

use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    RwLock,
};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    common::error::AppError,
    db::DataStore,
    models::{
        inventory::{Product, ProductOrder},
        operations::Order,
    },
};

#[derive(Debug, Default)]
pub struct InMemoryStore {
    orders: RwLock<Vec<Order>>,
    products: RwLock<Vec<Product>>,
    fail_orders: AtomicBool,
    fail_products: AtomicBool,
    order_fetches: AtomicUsize,
    product_fetches: AtomicUsize,
    latency: Option<Duration>,
}

impl InMemoryStore {
    pub fn new(orders: Vec<Order>, products: Vec<Product>) -> Self {
        Self {
            orders: RwLock::new(orders),
            products: RwLock::new(products),
            ..Default::default()
        }
    }

    // Cada busca espera `latency` antes de responder.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn set_orders(&self, orders: Vec<Order>) {
        *self.orders.write().unwrap_or_else(|e| e.into_inner()) = orders;
    }

    pub fn set_products(&self, products: Vec<Product>) {
        *self.products.write().unwrap_or_else(|e| e.into_inner()) = products;
    }

    pub fn fail_orders(&self, fail: bool) {
        self.fail_orders.store(fail, Ordering::SeqCst);
    }

    pub fn fail_products(&self, fail: bool) {
        self.fail_products.store(fail, Ordering::SeqCst);
    }

    pub fn order_fetches(&self) -> usize {
        self.order_fetches.load(Ordering::SeqCst)
    }

    pub fn product_fetches(&self) -> usize {
        self.product_fetches.load(Ordering::SeqCst)
    }

    async fn wait(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl DataStore for InMemoryStore {
    async fn fetch_orders(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Order>, AppError> {
        self.order_fetches.fetch_add(1, Ordering::SeqCst);
        self.wait().await;

        if self.fail_orders.load(Ordering::SeqCst) {
            return Err(AppError::FetchFailure(sqlx::Error::PoolTimedOut));
        }

        let orders = self.orders.read().unwrap_or_else(|e| e.into_inner());
        Ok(orders
            .iter()
            .filter(|o| start <= o.created_at && o.created_at < end)
            .cloned()
            .collect())
    }

    async fn fetch_products(&self, order: ProductOrder) -> Result<Vec<Product>, AppError> {
        self.product_fetches.fetch_add(1, Ordering::SeqCst);
        self.wait().await;

        if self.fail_products.load(Ordering::SeqCst) {
            return Err(AppError::FetchFailure(sqlx::Error::PoolTimedOut));
        }

        let mut products = self.products.read().unwrap_or_else(|e| e.into_inner()).clone();
        if order == ProductOrder::NameAsc {
            products.sort_by(|a, b| a.name.cmp(&b.name));
        }
        Ok(products)
    }
}
