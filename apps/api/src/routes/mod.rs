pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::recommendation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/recommend-jobs", post(handlers::handle_recommend_jobs))
        .route(
            "/recommend-jobs-demo",
            post(handlers::handle_recommend_jobs_demo),
        )
        .route(
            "/recommend-jobs-real",
            post(handlers::handle_recommend_jobs_real),
        )
        .with_state(state)
}
