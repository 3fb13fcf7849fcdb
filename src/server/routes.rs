use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::export;
use crate::model::{EntryRecord, Staff};
use crate::server::AppState;

#[derive(Deserialize)]
pub struct AddStaffRequest {
    pub name: String,
}

#[derive(Deserialize)]
pub struct AddEntryRequest {
    pub staff_id: i64,
    pub date: String,
    pub blocks_cut: i64,
}

#[derive(Deserialize)]
pub struct EntriesParams {
    pub staff_id: Option<i64>,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

/// Map a storage failure to a 500. The driver error is logged, not leaked.
fn storage_error(e: crate::Error) -> HandlerError {
    tracing::error!("storage error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "internal storage error".to_string(),
        }),
    )
}

fn message(text: &str) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: text.to_string(),
    })
}

pub async fn list_staff(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Staff>>, HandlerError> {
    let store = state.store.lock().await;
    let staff = store.list_staff().map_err(storage_error)?;
    Ok(Json(staff))
}

/// Duplicate names are a silent no-op in the store; the response is the
/// same success message either way.
pub async fn add_staff(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddStaffRequest>,
) -> Result<Json<MessageResponse>, HandlerError> {
    let store = state.store.lock().await;
    store.add_staff(&req.name).map_err(storage_error)?;
    Ok(message("Staff added successfully"))
}

/// Deleting an id that was never assigned returns the same success
/// message as a real deletion.
pub async fn delete_staff(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, HandlerError> {
    let store = state.store.lock().await;
    store.delete_staff(id).map_err(storage_error)?;
    Ok(message("Staff deleted successfully"))
}

pub async fn add_entry(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddEntryRequest>,
) -> Result<Json<MessageResponse>, HandlerError> {
    let store = state.store.lock().await;
    store
        .add_entry(req.staff_id, &req.date, req.blocks_cut)
        .map_err(storage_error)?;
    Ok(message("Entry added successfully"))
}

pub async fn list_entries(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EntriesParams>,
) -> Result<Json<Vec<EntryRecord>>, HandlerError> {
    let store = state.store.lock().await;
    let entries = store.list_entries(params.staff_id).map_err(storage_error)?;
    Ok(Json(entries))
}

pub async fn delete_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, HandlerError> {
    let store = state.store.lock().await;
    store.delete_entry(id).map_err(storage_error)?;
    Ok(message("Entry deleted successfully"))
}

pub async fn reset(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MessageResponse>, HandlerError> {
    let store = state.store.lock().await;
    store.reset().map_err(storage_error)?;
    Ok(message("All data reset successfully"))
}

/// CSV download of all joined entries. Filename carries the server's
/// local date at request time.
pub async fn export_csv(State(state): State<Arc<AppState>>) -> Result<Response, HandlerError> {
    let store = state.store.lock().await;
    let body = export::export_csv(&store).map_err(storage_error)?;
    drop(store);

    let filename = export::export_filename(chrono::Local::now().date_naive());
    let headers = [
        (header::CONTENT_TYPE, "text/csv".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={filename}"),
        ),
    ];

    Ok((headers, body).into_response())
}
