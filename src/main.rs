use std::sync::Arc;

use shopping_cart::{
    app::{self, product::ProductService, shopping_cart::ShoppingCartService},
    config::Config,
    infrastructure::{
        database::DatabaseManager,
        logger::Logger,
        persistence::{PgProductRepository, PgShoppingCartRepository},
    },
};
use tokio::{net::TcpListener, signal};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::load()?;
    Logger::init(&config.logging)?;

    info!("starting shopping-cart service");

    let database = DatabaseManager::connect(&config.database)
        .await
        .inspect_err(|e| error!("error connecting to database: {}", e))?;

    if config.database.auto_migrate {
        database.ensure_schema().await?;
    }

    let pool = database.get_pool().clone();
    let shopping_cart_service =
        ShoppingCartService::new(Arc::new(PgShoppingCartRepository::new(pool.clone())));
    let product_service = ProductService::new(Arc::new(PgProductRepository::new(pool)));

    let app = app::router(shopping_cart_service, product_service);

    let listener = TcpListener::bind(config.http.socket_addr()?).await?;
    info!("🚀 shopping-cart service running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    database.close().await;
    info!("shopping-cart service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
