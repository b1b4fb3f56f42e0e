use catalog_backend::{
    AppState,
    config::{Config, Storage},
    handlers,
};
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,catalog_backend=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let state = match &config.storage {
        Storage::Postgres { database_url } => {
            tracing::info!("Connecting to database...");
            let db = Database::connect(database_url.as_str()).await?;

            if config.run_migrations {
                tracing::info!("Running migrations...");
                migration::Migrator::up(&db, None).await?;
            }

            AppState::with_database(db)
        }
        Storage::Memory => {
            tracing::warn!("Using in-memory category storage; data is lost on shutdown");
            AppState::in_memory()
        }
    };

    let app = handlers::router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
