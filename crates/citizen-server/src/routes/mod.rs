pub mod chat;
pub mod dashboard;
pub mod sentiment;
pub mod services;
pub mod sessions;
pub mod status;

use axum::Router;

use crate::state::AppState;

pub fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/status", status::router())
        .nest("/sessions", sessions::router())
        .nest("/chat", chat::router())
        .nest("/sentiment", sentiment::router())
        .nest("/services", services::router())
        .nest("/dashboard", dashboard::router())
}
