mod model;
mod server;

use crate::server::{config::Config, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), server::error::AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let store = startup::connect_to_database(&config).await;

    let app = router::router().with_state(AppState::new(store, &config));

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Listening on {}", config.bind_address());

    axum::serve(listener, app).await?;

    Ok(())
}
