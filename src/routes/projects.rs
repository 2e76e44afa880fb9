//! Project Routes
//!
//! Create a screening project, fetch its details, and stream its
//! investigation as server-sent events. The stream route drives the
//! whole investigation: the project is marked `running` when the stream
//! opens and `completed`/`failed` when the terminal event passes
//! through. A client disconnect closes the channel, which cancels the
//! investigation upstream.

use std::convert::Infallible;

use axum::extract::{Path, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::Json;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::{Stream, StreamExt};
use tracing::warn;

use crate::models::project::{CheckInfo, Project, ProjectStatus, StartRequest, StartResponse};
use crate::services::agent::InvestigationEvent;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

/// `POST /api/projects/start`
pub async fn start(
    State(state): State<AppState>,
    Json(request): Json<StartRequest>,
) -> AppResult<Json<StartResponse>> {
    if request.entity_name.trim().is_empty() {
        return Err(AppError::validation("entity_name is required"));
    }

    let checks = CheckInfo::build(&request.checks);
    if checks.is_empty() {
        return Err(AppError::validation("no known checks selected"));
    }

    let project = state
        .store
        .create(Project::new(
            request.entity_name.trim(),
            request.entity_type,
            request.country,
            checks,
        ))
        .await;

    Ok(Json(StartResponse {
        project_id: project.id,
        entity_name: project.entity_name,
        entity_type: project.entity_type,
        checks: project.checks,
    }))
}

/// `GET /api/projects/{id}`
pub async fn details(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> AppResult<Json<Project>> {
    state
        .store
        .get(&project_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("project {}", project_id)))
}

/// `GET /api/projects/{id}/stream`
///
/// Unknown projects are a 404 before any SSE frame is written.
pub async fn stream(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> AppResult<Sse<impl Stream<Item = Result<Event, Infallible>>>> {
    let project = state
        .store
        .get(&project_id)
        .await
        .ok_or_else(|| AppError::not_found(format!("project {}", project_id)))?;

    state
        .store
        .update_status(&project_id, ProjectStatus::Running)
        .await;

    let events = state.investigations.stream(project);
    let frames = frame_events(state, project_id, events);

    Ok(Sse::new(ReceiverStream::new(frames).map(Ok)).keep_alive(KeepAlive::default()))
}

/// Relay investigation events into SSE frames, updating the project
/// status when a terminal event passes through.
fn frame_events(
    state: AppState,
    project_id: String,
    mut events: mpsc::Receiver<InvestigationEvent>,
) -> mpsc::Receiver<Event> {
    let (tx, rx) = mpsc::channel(crate::services::agent::runner::EVENT_CHANNEL_CAPACITY);

    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            if event.is_terminal() {
                let status = match &event {
                    InvestigationEvent::InvestigationCompleted { .. } => ProjectStatus::Completed,
                    _ => ProjectStatus::Failed,
                };
                state.store.update_status(&project_id, status).await;
            }

            let frame = match serde_json::to_string(&event) {
                Ok(json) => Event::default().data(json),
                Err(e) => {
                    warn!(project_id, error = %e, "failed to serialize event");
                    continue;
                }
            };
            if tx.send(frame).await.is_err() {
                // Client gone; dropping `events` cancels the investigation
                break;
            }
        }
    });

    rx
}
