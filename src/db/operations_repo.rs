// src/db/operations_repo.rs

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{common::error::AppError, models::operations::Order};

// Leitura da tabela 'orders'. Nenhuma escrita acontece aqui.
#[derive(Clone)]
pub struct OperationsRepository {
    pool: PgPool,
}

impl OperationsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Pedidos com `start <= created_at < end`.
    pub async fn get_orders_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Order>, AppError> {
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, created_at, total_amount
            FROM orders
            WHERE created_at >= $1
              AND created_at < $2
            "#,
        )
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await?;

        Ok(orders)
    }
}
