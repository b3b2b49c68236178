// src/services/dashboard_service.rs

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use chrono::{DateTime, FixedOffset, Utc};
use tokio::sync::{Mutex, RwLock};

use crate::{
    common::error::AppError,
    db::DataStore,
    models::{
        dashboard::{DailyStats, DashboardEvent, DashboardState},
        inventory::ProductOrder,
    },
    services::daily_stats::{compute_daily_stats, DayWindow},
};

// Transição pura do estado do Dashboard.
// Uma falha só desliga o `loading`: os números anteriores continuam na tela.
pub fn reduce(state: DashboardState, event: DashboardEvent) -> DashboardState {
    match event {
        DashboardEvent::RefreshStarted => DashboardState { loading: true, ..state },
        DashboardEvent::RefreshSucceeded { stats, at } => DashboardState {
            stats,
            loading: false,
            last_refreshed_at: Some(at),
        },
        DashboardEvent::RefreshFailed => DashboardState { loading: false, ..state },
    }
}

#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn DataStore>,
    business_offset: FixedOffset,
    state: Arc<RwLock<DashboardState>>,
    // Um refresh por vez; quem chega durante um refresh reaproveita o resultado.
    refresh_gate: Arc<Mutex<()>>,
    completed_refreshes: Arc<AtomicU64>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn DataStore>, business_offset: FixedOffset) -> Self {
        Self {
            store,
            business_offset,
            state: Arc::new(RwLock::new(DashboardState::default())),
            refresh_gate: Arc::new(Mutex::new(())),
            completed_refreshes: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn snapshot(&self) -> DashboardState {
        self.state.read().await.clone()
    }

    pub async fn refresh(&self) -> DashboardState {
        self.refresh_at(Utc::now()).await
    }

    pub async fn refresh_at(&self, now: DateTime<Utc>) -> DashboardState {
        let seen = self.completed_refreshes.load(Ordering::Acquire);

        // Task própria: se quem pediu desistir (cliente desconectou), o refresh termina mesmo assim
        // e o `loading` não fica preso.
        let service = self.clone();
        match tokio::spawn(async move { service.run_refresh(seen, now).await }).await {
            Ok(state) => state,
            Err(e) => {
                tracing::error!("Task de refresh abortada: {}", e);
                self.dispatch(DashboardEvent::RefreshFailed).await
            }
        }
    }

    async fn run_refresh(&self, seen: u64, now: DateTime<Utc>) -> DashboardState {
        let _gate = self.refresh_gate.lock().await;

        if self.completed_refreshes.load(Ordering::Acquire) != seen {
            tracing::debug!("Refresh concluído enquanto aguardava; reaproveitando o resultado");
            return self.snapshot().await;
        }

        self.dispatch(DashboardEvent::RefreshStarted).await;

        let event = match self.load_stats(now).await {
            Ok(stats) => {
                tracing::info!(
                    "📊 Resumo do dia atualizado: {} pedidos, vendas {}, {} produtos, {} com estoque baixo",
                    stats.total_orders,
                    stats.today_sales,
                    stats.products_count,
                    stats.low_stock_count
                );
                DashboardEvent::RefreshSucceeded { stats, at: now }
            }
            Err(e) => {
                tracing::error!("Erro ao buscar estatísticas: {}", e);
                DashboardEvent::RefreshFailed
            }
        };

        let state = self.dispatch(event).await;
        self.completed_refreshes.fetch_add(1, Ordering::Release);
        state
    }

    // Busca pedidos do dia e produtos e agrega. Qualquer falha aborta tudo.
    pub async fn load_stats(&self, now: DateTime<Utc>) -> Result<DailyStats, AppError> {
        let window = DayWindow::containing(now, self.business_offset);
        tracing::debug!("Buscando pedidos de {} ({} .. {})", window.date(), window.start(), window.end());

        let orders = self.store.fetch_orders(window.start(), window.end()).await?;
        let products = self.store.fetch_products(ProductOrder::Natural).await?;

        compute_daily_stats(&orders, &products, &window)
    }

    async fn dispatch(&self, event: DashboardEvent) -> DashboardState {
        let mut state = self.state.write().await;
        *state = reduce(std::mem::take(&mut *state), event);
        state.clone()
    }
}
