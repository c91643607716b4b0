//! GraphQL object and input types
//!
//! Objects wrap the core records; nested fields (`User.projects`,
//! `Todo.project`, ...) resolve against the shared tracker on demand.

use async_graphql::{Context, InputObject, Object, Result, ID};
use trackctl_core::{Project, Todo, TodoWithProject, User, UserTodosWithProjects};

use crate::state::SharedTracker;

fn gql_id(raw: impl std::fmt::Display) -> ID {
    ID(raw.to_string())
}

pub struct UserObject(pub User);

#[Object(name = "User")]
impl UserObject {
    async fn id(&self) -> ID {
        gql_id(self.0.id)
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    /// Projects this user owns
    async fn projects(&self, ctx: &Context<'_>) -> Result<Vec<ProjectObject>> {
        let tracker = ctx.data::<SharedTracker>()?.read().await;
        Ok(tracker
            .projects_by_user(self.0.id)
            .cloned()
            .map(ProjectObject)
            .collect())
    }

    /// Todos this user owns, whichever project they sit in
    async fn todos(&self, ctx: &Context<'_>) -> Result<Vec<TodoObject>> {
        let tracker = ctx.data::<SharedTracker>()?.read().await;
        Ok(tracker
            .todos_by_user(self.0.id)
            .cloned()
            .map(TodoObject)
            .collect())
    }
}

pub struct ProjectObject(pub Project);

#[Object(name = "Project")]
impl ProjectObject {
    async fn id(&self) -> ID {
        gql_id(self.0.id)
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn user_id(&self) -> ID {
        gql_id(self.0.user_id)
    }

    async fn user(&self, ctx: &Context<'_>) -> Result<Option<UserObject>> {
        let tracker = ctx.data::<SharedTracker>()?.read().await;
        Ok(tracker.find_user(self.0.user_id).cloned().map(UserObject))
    }

    async fn todos(&self, ctx: &Context<'_>) -> Result<Vec<TodoObject>> {
        let tracker = ctx.data::<SharedTracker>()?.read().await;
        Ok(tracker
            .todos_by_project(self.0.id)
            .cloned()
            .map(TodoObject)
            .collect())
    }
}

pub struct TodoObject(pub Todo);

#[Object(name = "Todo")]
impl TodoObject {
    async fn id(&self) -> ID {
        gql_id(self.0.id)
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn completed(&self) -> bool {
        self.0.completed
    }

    async fn user_id(&self) -> ID {
        gql_id(self.0.user_id)
    }

    async fn project_id(&self) -> ID {
        gql_id(self.0.project_id)
    }

    async fn user(&self, ctx: &Context<'_>) -> Result<Option<UserObject>> {
        let tracker = ctx.data::<SharedTracker>()?.read().await;
        Ok(tracker.find_user(self.0.user_id).cloned().map(UserObject))
    }

    async fn project(&self, ctx: &Context<'_>) -> Result<Option<ProjectObject>> {
        let tracker = ctx.data::<SharedTracker>()?.read().await;
        Ok(tracker
            .find_project(self.0.project_id)
            .cloned()
            .map(ProjectObject))
    }
}

pub struct TodoWithProjectObject(pub TodoWithProject);

#[Object(name = "TodoWithProject")]
impl TodoWithProjectObject {
    async fn todo_id(&self) -> ID {
        gql_id(self.0.todo_id)
    }

    async fn todo_title(&self) -> &str {
        &self.0.todo_title
    }

    async fn completed(&self) -> bool {
        self.0.completed
    }

    /// Null when the project is not one of the owner's own projects
    async fn project_id(&self) -> Option<ID> {
        self.0.project_id.map(gql_id)
    }

    async fn project_name(&self) -> Option<&str> {
        self.0.project_name.as_deref()
    }
}

pub struct UserTodosWithProjectsObject(pub UserTodosWithProjects);

#[Object(name = "UserTodosWithProjects")]
impl UserTodosWithProjectsObject {
    async fn user(&self) -> UserObject {
        UserObject(self.0.user.clone())
    }

    async fn projects(&self) -> Vec<ProjectObject> {
        self.0.projects.iter().cloned().map(ProjectObject).collect()
    }

    async fn todos(&self) -> Vec<TodoWithProjectObject> {
        self.0
            .todos
            .iter()
            .cloned()
            .map(TodoWithProjectObject)
            .collect()
    }
}

#[derive(InputObject)]
pub struct AddUserInput {
    pub name: String,
}

#[derive(InputObject)]
pub struct AddProjectInput {
    pub name: String,
    pub user_id: ID,
}

#[derive(InputObject)]
pub struct AddTodoInput {
    pub title: String,
    pub user_id: ID,
    pub project_id: ID,
}
