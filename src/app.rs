use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/activities",
            get(handlers::list_activities).post(handlers::create_activity),
        )
        .route("/api/activities/:id", delete(handlers::delete_activity))
        .route(
            "/api/activities/:id/laps",
            get(handlers::list_laps).post(handlers::record_lap),
        )
        .route(
            "/api/activities/:id/laps/:lap_id",
            delete(handlers::delete_lap),
        )
        .with_state(state)
}
