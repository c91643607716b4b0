//! Todo endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use trackctl_core::{NewTodo, Todo, TodoId};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, PathId};
use crate::state::AppState;

async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    let tracker = state.tracker().read().await;
    Json(tracker.todos().to_vec())
}

/// POST /todos - body `{title, userId, projectId}`
async fn create_todo(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<NewTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = state.tracker().write().await.create_todo(input)?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo(
    State(state): State<AppState>,
    PathId(id): PathId<TodoId>,
) -> Result<Json<Todo>, ApiError> {
    let tracker = state.tracker().read().await;
    Ok(Json(tracker.todo(id)?.clone()))
}

/// Todo routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo))
}
