//! User endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use trackctl_core::{NewUser, Todo, User, UserId, UserTodosWithProjects};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, PathId};
use crate::state::AppState;

/// GET /users - all users in creation order
async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    let tracker = state.tracker().read().await;
    Json(tracker.users().to_vec())
}

/// POST /users - create a user
async fn create_user(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<NewUser>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state.tracker().write().await.create_user(input)?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users/{id}
async fn get_user(
    State(state): State<AppState>,
    PathId(id): PathId<UserId>,
) -> Result<Json<User>, ApiError> {
    let tracker = state.tracker().read().await;
    Ok(Json(tracker.user(id)?.clone()))
}

/// GET /users/{id}/todos - todos owned by the user; unknown users own nothing
async fn list_user_todos(
    State(state): State<AppState>,
    PathId(id): PathId<UserId>,
) -> Json<Vec<Todo>> {
    let tracker = state.tracker().read().await;
    Json(tracker.todos_by_user(id).cloned().collect())
}

/// GET /user/{id}/todos-with-projects - user, their projects, annotated todos
async fn todos_with_projects(
    State(state): State<AppState>,
    PathId(id): PathId<UserId>,
) -> Result<Json<UserTodosWithProjects>, ApiError> {
    let view = state.tracker().read().await.user_todos_with_projects(id)?;
    Ok(Json(view))
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user))
        .route("/users/{id}/todos", get(list_user_todos))
        .route("/user/{id}/todos-with-projects", get(todos_with_projects))
}
