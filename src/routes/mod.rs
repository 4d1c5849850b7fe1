use crate::models::AppState;
use axum::Router;

pub mod home_routes;
pub mod notify_routes;
pub mod record_routes;
pub mod report_routes;

pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", notify_routes::router())
        .nest("/api/v1", record_routes::router())
        .nest("/api/v1", report_routes::router())
        .merge(home_routes::router())
        .with_state(state)
}
