//! Conversions between core records and protobuf messages

use tonic::Status;
use trackctl_core::{Project, Todo, TodoWithProject, TrackerError, User, UserTodosWithProjects};

use super::pb;

/// Map a tracker failure onto a gRPC status carrying the tracker's message.
pub fn status_from(err: TrackerError) -> Status {
    match err {
        TrackerError::Validation(e) => Status::invalid_argument(e.to_string()),
        e @ TrackerError::NotFound { .. } => Status::not_found(e.to_string()),
    }
}

impl From<User> for pb::User {
    fn from(user: User) -> Self {
        Self {
            id: user.id.get(),
            name: user.name,
        }
    }
}

impl From<Project> for pb::Project {
    fn from(project: Project) -> Self {
        Self {
            id: project.id.get(),
            name: project.name,
            user_id: project.user_id.get(),
        }
    }
}

impl From<Todo> for pb::Todo {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id.get(),
            title: todo.title,
            completed: todo.completed,
            user_id: todo.user_id.get(),
            project_id: todo.project_id.get(),
        }
    }
}

impl From<TodoWithProject> for pb::TodoWithProject {
    fn from(todo: TodoWithProject) -> Self {
        Self {
            todo_id: todo.todo_id.get(),
            todo_title: todo.todo_title,
            completed: todo.completed,
            project_id: todo.project_id.map(|id| id.get()),
            project_name: todo.project_name,
        }
    }
}

impl From<UserTodosWithProjects> for pb::UserTodosWithProjects {
    fn from(view: UserTodosWithProjects) -> Self {
        Self {
            user: Some(view.user.into()),
            projects: view.projects.into_iter().map(Into::into).collect(),
            todos: view.todos.into_iter().map(Into::into).collect(),
        }
    }
}
