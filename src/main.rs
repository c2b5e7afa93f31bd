use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lv_search_web::{config, AppState, HttpSearchBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lv_search_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration / Ielādē konfigurāciju
    let app_config = config::init_config().map_err(anyhow::Error::msg)?;
    let backend = HttpSearchBackend::new(&app_config.backend)?;
    tracing::info!("Search backend: {}", backend.base_url());
    let state = Arc::new(AppState::new(Arc::new(backend)).with_top_k(app_config.backend.top_k));

    let app = lv_search_web::build_router(state);

    let bind_addr = app_config.get_bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server running at http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
