// src/handlers/dashboard.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{config::AppState, models::dashboard::DashboardState};

// GET /api/dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Resumo do dia como está na tela agora", body = DashboardState)
    )
)]
pub async fn get_dashboard(State(app_state): State<AppState>) -> impl IntoResponse {
    let state = app_state.dashboard_service.snapshot().await;
    (StatusCode::OK, Json(state))
}

// POST /api/dashboard/refresh
// Nunca responde erro: se a busca falhar, os números anteriores são mantidos e a falha vai só para o log.
#[utoipa::path(
    post,
    path = "/api/dashboard/refresh",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Resumo do dia recalculado (ou o anterior, se a busca falhou)", body = DashboardState)
    )
)]
pub async fn refresh_dashboard(State(app_state): State<AppState>) -> impl IntoResponse {
    let state = app_state.dashboard_service.refresh().await;
    (StatusCode::OK, Json(state))
}
