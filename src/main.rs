//src/main.rs

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use pos_dashboard::{
    config::{AppState, Settings},
    create_router,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    // Se a configuração ou o banco falharem, a aplicação não deve iniciar.
    let settings = Settings::from_env()?;
    let app_state = AppState::new(&settings).await?;

    // Primeira carga do Dashboard, como na abertura da tela
    let dashboard = app_state.dashboard_service.clone();
    tokio::spawn(async move {
        dashboard.refresh().await;
    });

    let app = create_router(app_state);

    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
