//! Query and mutation roots

use async_graphql::{Context, Object, Result, ID};
use trackctl_core::{NewProject, NewTodo, NewUser, ProjectId, TodoId, UserId};

use super::error::{parse_id, tracker_error};
use super::types::{
    AddProjectInput, AddTodoInput, AddUserInput, ProjectObject, TodoObject, UserObject,
    UserTodosWithProjectsObject,
};
use crate::state::SharedTracker;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<UserObject>> {
        let tracker = ctx.data::<SharedTracker>()?.read().await;
        Ok(tracker.users().iter().cloned().map(UserObject).collect())
    }

    async fn projects(&self, ctx: &Context<'_>) -> Result<Vec<ProjectObject>> {
        let tracker = ctx.data::<SharedTracker>()?.read().await;
        Ok(tracker.projects().iter().cloned().map(ProjectObject).collect())
    }

    async fn todos(&self, ctx: &Context<'_>) -> Result<Vec<TodoObject>> {
        let tracker = ctx.data::<SharedTracker>()?.read().await;
        Ok(tracker.todos().iter().cloned().map(TodoObject).collect())
    }

    /// Null when no user has this id
    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<UserObject>> {
        let id: UserId = parse_id("id", &id)?;
        let tracker = ctx.data::<SharedTracker>()?.read().await;
        Ok(tracker.find_user(id).cloned().map(UserObject))
    }

    async fn project(&self, ctx: &Context<'_>, id: ID) -> Result<Option<ProjectObject>> {
        let id: ProjectId = parse_id("id", &id)?;
        let tracker = ctx.data::<SharedTracker>()?.read().await;
        Ok(tracker.find_project(id).cloned().map(ProjectObject))
    }

    async fn todo(&self, ctx: &Context<'_>, id: ID) -> Result<Option<TodoObject>> {
        let id: TodoId = parse_id("id", &id)?;
        let tracker = ctx.data::<SharedTracker>()?.read().await;
        Ok(tracker.find_todo(id).cloned().map(TodoObject))
    }

    /// The user, their projects and their todos annotated with project
    /// names. Errors with "User not found" for unknown users.
    async fn user_todos_with_projects(
        &self,
        ctx: &Context<'_>,
        user_id: ID,
    ) -> Result<UserTodosWithProjectsObject> {
        let user_id: UserId = parse_id("userId", &user_id)?;
        let tracker = ctx.data::<SharedTracker>()?.read().await;
        tracker
            .user_todos_with_projects(user_id)
            .map(UserTodosWithProjectsObject)
            .map_err(tracker_error)
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn add_user(&self, ctx: &Context<'_>, input: AddUserInput) -> Result<UserObject> {
        let mut tracker = ctx.data::<SharedTracker>()?.write().await;
        tracker
            .create_user(NewUser::named(input.name))
            .map(UserObject)
            .map_err(tracker_error)
    }

    async fn add_project(
        &self,
        ctx: &Context<'_>,
        input: AddProjectInput,
    ) -> Result<ProjectObject> {
        let user_id: UserId = parse_id("userId", &input.user_id)?;
        let mut tracker = ctx.data::<SharedTracker>()?.write().await;
        tracker
            .create_project(NewProject::new(input.name, user_id))
            .map(ProjectObject)
            .map_err(tracker_error)
    }

    async fn add_todo(&self, ctx: &Context<'_>, input: AddTodoInput) -> Result<TodoObject> {
        let user_id: UserId = parse_id("userId", &input.user_id)?;
        let project_id: ProjectId = parse_id("projectId", &input.project_id)?;
        let mut tracker = ctx.data::<SharedTracker>()?.write().await;
        tracker
            .create_todo(NewTodo::new(input.title, user_id, project_id))
            .map(TodoObject)
            .map_err(tracker_error)
    }
}
