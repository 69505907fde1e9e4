use crate::errors::AppError;
use crate::models::{
    Activity, ActivitySummary, CreateActivityRequest, DeleteResponse, Lap, LapHistoryResponse,
};
use crate::state::AppState;
use crate::ui::INDEX_HTML;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn list_activities(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActivitySummary>>, AppError> {
    Ok(Json(state.store.list_activities().await))
}

pub async fn create_activity(
    State(state): State<AppState>,
    Json(payload): Json<CreateActivityRequest>,
) -> Result<(StatusCode, Json<Activity>), AppError> {
    let name = payload.name.unwrap_or_default();
    let activity = state.store.create_activity(&name).await?;
    Ok((StatusCode::CREATED, Json(activity)))
}

pub async fn delete_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let id = parse_id(&id, "Invalid id")?;
    state.store.delete_activity(id).await?;
    Ok(Json(DeleteResponse { success: true }))
}

pub async fn record_lap(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Lap>), AppError> {
    let id = parse_id(&id, "Invalid id")?;
    let lap = state.store.record_lap(id).await?;
    Ok((StatusCode::CREATED, Json(lap)))
}

pub async fn list_laps(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LapHistoryResponse>, AppError> {
    let id = parse_id(&id, "Invalid id")?;
    let (activity, laps) = state.store.list_laps(id).await?;
    Ok(Json(LapHistoryResponse { activity, laps }))
}

pub async fn delete_lap(
    State(state): State<AppState>,
    Path((id, lap_id)): Path<(String, String)>,
) -> Result<Json<DeleteResponse>, AppError> {
    let lap_id = parse_id(&lap_id, "Invalid lapId")?;
    let id = parse_id(&id, "Invalid id")?;
    state.store.delete_lap(id, lap_id).await?;
    Ok(Json(DeleteResponse { success: true }))
}

// Path params are parsed by hand so a non-integer id answers with the
// same {"error": ...} body as every other failure.
fn parse_id(raw: &str, message: &'static str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::bad_request(message))
}
