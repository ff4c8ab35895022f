use biblioteca::{AppState, Config, DiskStorage, create_router};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Inizializza la configurazione
    let config = Config::from_env()?;
    config.print_info();

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    // Schema allineato ad ogni avvio
    sqlx::migrate!("./migrations").run(&pool).await?;

    let storage = DiskStorage::new(
        config.storage_root.clone(),
        config.app_url.clone(),
        config.jwt_secret.clone(),
    );

    let state = Arc::new(AppState::new(
        pool,
        config.jwt_secret.clone(),
        config.storage_bucket.clone(),
        storage,
    ));

    let app = create_router(state);

    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
