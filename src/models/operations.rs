// src/models/operations.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Pedido (tabela 'orders') ---
// Somente leitura: quem cria os pedidos é o PDV, não este serviço.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    // Pode vir NULL do banco; na soma conta como zero.
    pub total_amount: Option<Decimal>,
}

impl Order {
    pub fn amount_or_zero(&self) -> Decimal {
        self.total_amount.unwrap_or(Decimal::ZERO)
    }
}
