// src/models/dashboard.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

// 1. Resumo do Dia (os cards do topo)
// Recalculado a cada refresh; nunca persistido.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    pub today_sales: Decimal,
    pub total_orders: u64,
    pub products_count: u64,
    pub low_stock_count: u64,
}

// 2. Estado da tela do Dashboard
#[derive(Debug, Clone, PartialEq, Default, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    pub stats: DailyStats,
    pub loading: bool,
    /// Momento do último cálculo bem-sucedido.
    pub last_refreshed_at: Option<DateTime<Utc>>,
}

// Eventos que movem o estado do Dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    RefreshStarted,
    RefreshSucceeded { stats: DailyStats, at: DateTime<Utc> },
    RefreshFailed,
}
