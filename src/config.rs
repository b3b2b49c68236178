// src/config.rs

use std::{env, sync::Arc, time::Duration};

use chrono::FixedOffset;
use sqlx::postgres::PgPoolOptions;

use crate::{
    common::error::AppError,
    db::{DataStore, PgDataStore},
    services::{DashboardService, InventoryService},
};

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    // Fuso fixo da loja, usado para decidir o que é "hoje".
    pub business_offset: FixedOffset,
}

impl Settings {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(get: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = get("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| AppError::Config("DATABASE_URL deve ser definida".into()))?;

        let bind_addr = get("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let max_connections = parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), 5u32)?;
        let acquire_timeout_secs = parse_or("DB_ACQUIRE_TIMEOUT_SECS", get("DB_ACQUIRE_TIMEOUT_SECS"), 3u64)?;
        let offset_minutes = parse_or("BUSINESS_UTC_OFFSET_MINUTES", get("BUSINESS_UTC_OFFSET_MINUTES"), 0i32)?;

        let business_offset = offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                AppError::Config(format!("BUSINESS_UTC_OFFSET_MINUTES fora do intervalo: {offset_minutes}"))
            })?;

        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
            business_offset,
        })
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, raw: Option<String>, default: T) -> Result<T, AppError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{key} inválida: '{value}'"))),
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub inventory_service: InventoryService,
}

impl AppState {
    pub async fn new(settings: &Settings) -> Result<Self, AppError> {
        let db_pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout)
            .connect(&settings.database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::with_store(Arc::new(PgDataStore::new(db_pool)), settings.business_offset))
    }

    // Monta o gráfico de dependências sobre qualquer DataStore
    pub fn with_store(store: Arc<dyn DataStore>, business_offset: FixedOffset) -> Self {
        Self {
            dashboard_service: DashboardService::new(store.clone(), business_offset),
            inventory_service: InventoryService::new(store),
        }
    }
}
