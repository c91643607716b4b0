//! Project endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use trackctl_core::{NewProject, Project, ProjectId};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, PathId};
use crate::state::AppState;

/// GET /projects
async fn list_projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    let tracker = state.tracker().read().await;
    Json(tracker.projects().to_vec())
}

/// POST /projects - body `{name, userId}`; owner must exist
async fn create_project(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<NewProject>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    let project = state.tracker().write().await.create_project(input)?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /projects/{id}
async fn get_project(
    State(state): State<AppState>,
    PathId(id): PathId<ProjectId>,
) -> Result<Json<Project>, ApiError> {
    let tracker = state.tracker().read().await;
    Ok(Json(tracker.project(id)?.clone()))
}

/// Project routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route("/projects/{id}", get(get_project))
}
