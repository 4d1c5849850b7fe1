mod config;
mod db;
mod error;
mod gateway;
mod models;
mod report;
mod routes;
mod store;

use std::sync::Arc;

use crate::{config::Config, gateway::TwilioGateway, models::AppState, store::PgDeliveryStore};

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use axum::http::header;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cfg = Config::from_env()?;
    let pool = db::connect_pg(&cfg.database_url).await?;

    let state = AppState {
        db: pool.clone(),
        gateway: Arc::new(TwilioGateway::new(
            cfg.twilio_account_sid.clone(),
            cfg.twilio_auth_token.clone(),
        )),
        records: Arc::new(PgDeliveryStore::new(pool)),
        from_number: cfg.twilio_from_number.clone(),
    };

    // DEV ONLY: allow browser clients (portal static frontend) to call the API.
    // This fixes OPTIONS preflight (CORS) that otherwise returns 405 and blocks POST.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]);

    let app = routes::router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    tracing::info!("Listening on http://{}", cfg.bind_addr);
    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
