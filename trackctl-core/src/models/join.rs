//! Denormalized read model for a user's todos with their projects

use serde::Serialize;

use super::{Project, ProjectId, TodoId, User};

/// Todo annotated with its project, resolved within the owner's projects
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoWithProject {
    pub todo_id: TodoId,
    pub todo_title: String,
    pub completed: bool,
    /// `None` when the project is not one of the owner's own projects
    pub project_id: Option<ProjectId>,
    pub project_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserTodosWithProjects {
    pub user: User,
    pub projects: Vec<Project>,
    pub todos: Vec<TodoWithProject>,
}
