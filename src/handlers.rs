use crate::controller::{FetchOutcome, Handoff};
use crate::errors::{AppError, WidgetError};
use crate::models::{ClearQuery, CopyResponse, JokeRequest, ShareResponse, WidgetView};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::Utc;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let controller = state.controller.lock().await;
    Html(render_index(&controller.view(Utc::now())))
}

pub async fn get_state(State(state): State<AppState>) -> Json<WidgetView> {
    let controller = state.controller.lock().await;
    Json(controller.view(Utc::now()))
}

// The lock is not held across the joke API call.
pub async fn generate(
    State(state): State<AppState>,
    payload: Option<Json<JokeRequest>>,
) -> Result<(StatusCode, Json<WidgetView>), AppError> {
    let Json(request) = payload.unwrap_or_default();
    let ticket = state.controller.lock().await.begin_fetch(&request.category);

    let result = state.client.fetch(ticket.category()).await;

    let now = Utc::now();
    let mut controller = state.controller.lock().await;
    let status = match controller.finish_fetch(ticket, result, now).await? {
        FetchOutcome::Failed => StatusCode::BAD_GATEWAY,
        FetchOutcome::Loaded | FetchOutcome::Superseded => StatusCode::OK,
    };
    Ok((status, Json(controller.view(now))))
}

pub async fn show_history(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<WidgetView>, AppError> {
    let now = Utc::now();
    let mut controller = state.controller.lock().await;
    controller.show_history(id, now)?;
    Ok(Json(controller.view(now)))
}

pub async fn clear_history(
    State(state): State<AppState>,
    Query(query): Query<ClearQuery>,
) -> Result<Json<WidgetView>, AppError> {
    let now = Utc::now();
    let mut controller = state.controller.lock().await;
    controller.clear_history(query.confirm, now).await?;
    Ok(Json(controller.view(now)))
}

pub async fn toggle_favorite(State(state): State<AppState>) -> Result<Json<WidgetView>, AppError> {
    let now = Utc::now();
    let mut controller = state.controller.lock().await;
    controller.toggle_favorite(now).await?;
    Ok(Json(controller.view(now)))
}

pub async fn copy(State(state): State<AppState>) -> Result<Json<CopyResponse>, AppError> {
    let now = Utc::now();
    let mut controller = state.controller.lock().await;
    let text = controller.copy(&mut Handoff::default(), now)?;
    Ok(Json(CopyResponse {
        text,
        view: controller.view(now),
    }))
}

pub async fn share(State(state): State<AppState>) -> Result<Json<ShareResponse>, AppError> {
    let controller = state.controller.lock().await;
    let url = controller
        .share_url()
        .ok_or(WidgetError::NothingDisplayed)?;
    Ok(Json(ShareResponse { url }))
}
