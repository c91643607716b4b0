//! The tracker store
//!
//! Three insertion-ordered collections plus one id sequence per entity
//! type. Lookups are linear scans. Creation validates input, checks
//! foreign keys, then appends; a rejected creation touches nothing.
//!
//! `Tracker` is a plain value with `&mut self` writers. Callers that share
//! it across tasks wrap it in a single lock (see `trackctl-server`).

use tracing::debug;

use crate::error::{Resource, Result, TrackerError};
use crate::models::ids::require_id;
use crate::models::{
    NewProject, NewTodo, NewUser, NonEmptyText, Project, ProjectId, Todo, TodoId,
    TodoWithProject, User, UserId, UserTodosWithProjects,
};

/// Monotonic id source starting at 1
#[derive(Debug, Clone)]
struct IdSequence {
    next: u64,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdSequence {
    /// Hand out the current value and move past it.
    fn advance(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// In-memory store of users, projects and todos
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    users: Vec<User>,
    projects: Vec<Project>,
    todos: Vec<Todo>,
    user_ids: IdSequence,
    project_ids: IdSequence,
    todo_ids: IdSequence,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a user.
    ///
    /// # Errors
    /// `Validation` when `name` is missing or empty.
    pub fn create_user(&mut self, input: NewUser) -> Result<User> {
        let name = NonEmptyText::parse("name", input.name)
            .inspect_err(|err| debug!(%err, "user rejected"))?;

        let user = User {
            id: UserId::new(self.user_ids.advance()),
            name: name.into_string(),
        };
        self.users.push(user.clone());

        debug!(user_id = %user.id, "user created");
        Ok(user)
    }

    /// Create a project owned by an existing user.
    ///
    /// # Errors
    /// `Validation` when `name` or `userId` is missing; `NotFound` when
    /// the owner does not exist.
    pub fn create_project(&mut self, input: NewProject) -> Result<Project> {
        let (name, user_id) = self
            .check_new_project(input)
            .inspect_err(|err| debug!(%err, "project rejected"))?;

        let project = Project {
            id: ProjectId::new(self.project_ids.advance()),
            name: name.into_string(),
            user_id,
        };
        self.projects.push(project.clone());

        debug!(project_id = %project.id, user_id = %project.user_id, "project created");
        Ok(project)
    }

    fn check_new_project(&self, input: NewProject) -> Result<(NonEmptyText, UserId)> {
        let name = NonEmptyText::parse("name", input.name)?;
        let user_id = require_id("userId", input.user_id)?;
        self.user(user_id)?;
        Ok((name, user_id))
    }

    /// Create a todo for an existing user under an existing project.
    ///
    /// Foreign keys are checked against the global collections, user first;
    /// the project does not have to belong to the todo's owner.
    ///
    /// # Errors
    /// `Validation` when `title`, `userId` or `projectId` is missing;
    /// `NotFound` for the first unresolved reference.
    pub fn create_todo(&mut self, input: NewTodo) -> Result<Todo> {
        let (title, user_id, project_id) = self
            .check_new_todo(input)
            .inspect_err(|err| debug!(%err, "todo rejected"))?;

        let todo = Todo {
            id: TodoId::new(self.todo_ids.advance()),
            title: title.into_string(),
            completed: false,
            user_id,
            project_id,
        };
        self.todos.push(todo.clone());

        debug!(
            todo_id = %todo.id,
            user_id = %todo.user_id,
            project_id = %todo.project_id,
            "todo created"
        );
        Ok(todo)
    }

    fn check_new_todo(&self, input: NewTodo) -> Result<(NonEmptyText, UserId, ProjectId)> {
        let title = NonEmptyText::parse("title", input.title)?;
        let user_id = require_id("userId", input.user_id)?;
        let project_id = require_id("projectId", input.project_id)?;
        self.user(user_id)?;
        self.project(project_id)?;
        Ok((title, user_id, project_id))
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn find_user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn find_project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn find_todo(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Look up a user or fail with `NotFound`.
    pub fn user(&self, id: UserId) -> Result<&User> {
        self.find_user(id)
            .ok_or_else(|| TrackerError::not_found(Resource::User, id))
    }

    /// Look up a project or fail with `NotFound`.
    pub fn project(&self, id: ProjectId) -> Result<&Project> {
        self.find_project(id)
            .ok_or_else(|| TrackerError::not_found(Resource::Project, id))
    }

    /// Look up a todo or fail with `NotFound`.
    pub fn todo(&self, id: TodoId) -> Result<&Todo> {
        self.find_todo(id)
            .ok_or_else(|| TrackerError::not_found(Resource::Todo, id))
    }

    /// Projects owned by `user_id`, in insertion order.
    pub fn projects_by_user(&self, user_id: UserId) -> impl Iterator<Item = &Project> + '_ {
        self.projects.iter().filter(move |p| p.user_id == user_id)
    }

    /// Todos owned by `user_id`, in insertion order.
    ///
    /// Does not check that the user exists: an unknown id simply matches
    /// nothing.
    pub fn todos_by_user(&self, user_id: UserId) -> impl Iterator<Item = &Todo> + '_ {
        self.todos.iter().filter(move |t| t.user_id == user_id)
    }

    /// Todos filed under `project_id`, in insertion order.
    pub fn todos_by_project(&self, project_id: ProjectId) -> impl Iterator<Item = &Todo> + '_ {
        self.todos.iter().filter(move |t| t.project_id == project_id)
    }

    /// A user together with their projects and their todos.
    ///
    /// Each todo's project is resolved against the user's own projects
    /// only. A todo filed under someone else's project comes back with
    /// `project_id` and `project_name` unset even though that project exists.
    ///
    /// # Errors
    /// `NotFound` when the user does not exist.
    pub fn user_todos_with_projects(&self, user_id: UserId) -> Result<UserTodosWithProjects> {
        let user = self.user(user_id)?.clone();
        let projects: Vec<Project> = self.projects_by_user(user_id).cloned().collect();

        let todos = self
            .todos_by_user(user_id)
            .map(|todo| {
                let project = projects.iter().find(|p| p.id == todo.project_id);
                TodoWithProject {
                    todo_id: todo.id,
                    todo_title: todo.title.clone(),
                    completed: todo.completed,
                    project_id: project.map(|p| p.id),
                    project_name: project.map(|p| p.name.clone()),
                }
            })
            .collect();

        Ok(UserTodosWithProjects {
            user,
            projects,
            todos,
        })
    }
}
