mod model;
mod server;

use crate::server::{
    config::Config,
    error::AppError,
    event::EventBus,
    router,
    service::auth::token::TokenService,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::seed(&db, &config).await?;

    let state = AppState::new(
        db,
        TokenService::new(&config.jwt_secret, config.jwt_expire_seconds),
        EventBus::new(),
        config.max_failed_attempts,
    );

    let app = router::router().with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
