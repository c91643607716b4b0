//! `TrackerService` implementation

use futures::stream::{self, BoxStream, StreamExt};
use tonic::{Request, Response, Status};
use trackctl_core::{NewProject, NewTodo, NewUser, ProjectId, UserId};

use super::convert::status_from;
use super::pb::{self, tracker_service_server::TrackerService};
use crate::state::SharedTracker;

type EntityStream<T> = BoxStream<'static, Result<T, Status>>;

/// Stream a snapshot, one message per item.
fn stream_of<T: Send + 'static>(items: Vec<T>) -> EntityStream<T> {
    stream::iter(items.into_iter().map(Ok)).boxed()
}

/// gRPC handlers over the shared tracker
#[derive(Clone)]
pub struct TrackerGrpc {
    tracker: SharedTracker,
}

impl TrackerGrpc {
    pub fn new(tracker: SharedTracker) -> Self {
        Self { tracker }
    }
}

#[tonic::async_trait]
impl TrackerService for TrackerGrpc {
    #[tracing::instrument(skip_all)]
    async fn add_user(
        &self,
        request: Request<pb::AddUserRequest>,
    ) -> Result<Response<pb::UserResponse>, Status> {
        let req = request.into_inner();
        let user = self
            .tracker
            .write()
            .await
            .create_user(NewUser::named(req.name))
            .map_err(status_from)?;

        Ok(Response::new(pb::UserResponse {
            user: Some(user.into()),
        }))
    }

    #[tracing::instrument(skip_all)]
    async fn add_project(
        &self,
        request: Request<pb::AddProjectRequest>,
    ) -> Result<Response<pb::ProjectResponse>, Status> {
        let req = request.into_inner();
        let project = self
            .tracker
            .write()
            .await
            .create_project(NewProject::new(req.name, UserId::new(req.user_id)))
            .map_err(status_from)?;

        Ok(Response::new(pb::ProjectResponse {
            project: Some(project.into()),
        }))
    }

    #[tracing::instrument(skip_all)]
    async fn add_todo(
        &self,
        request: Request<pb::AddTodoRequest>,
    ) -> Result<Response<pb::TodoResponse>, Status> {
        let req = request.into_inner();
        let input = NewTodo::new(
            req.title,
            UserId::new(req.user_id),
            ProjectId::new(req.project_id),
        );
        let todo = self
            .tracker
            .write()
            .await
            .create_todo(input)
            .map_err(status_from)?;

        Ok(Response::new(pb::TodoResponse {
            todo: Some(todo.into()),
        }))
    }

    type GetUsersStream = EntityStream<pb::User>;

    async fn get_users(
        &self,
        _request: Request<pb::Empty>,
    ) -> Result<Response<Self::GetUsersStream>, Status> {
        let users: Vec<pb::User> = {
            let tracker = self.tracker.read().await;
            tracker.users().iter().cloned().map(Into::into).collect()
        };
        Ok(Response::new(stream_of(users)))
    }

    type GetProjectsStream = EntityStream<pb::Project>;

    async fn get_projects(
        &self,
        _request: Request<pb::Empty>,
    ) -> Result<Response<Self::GetProjectsStream>, Status> {
        let projects: Vec<pb::Project> = {
            let tracker = self.tracker.read().await;
            tracker.projects().iter().cloned().map(Into::into).collect()
        };
        Ok(Response::new(stream_of(projects)))
    }

    type GetTodosStream = EntityStream<pb::Todo>;

    async fn get_todos(
        &self,
        _request: Request<pb::Empty>,
    ) -> Result<Response<Self::GetTodosStream>, Status> {
        let todos: Vec<pb::Todo> = {
            let tracker = self.tracker.read().await;
            tracker.todos().iter().cloned().map(Into::into).collect()
        };
        Ok(Response::new(stream_of(todos)))
    }

    type GetTodosByUserStream = EntityStream<pb::Todo>;

    /// Unknown users get an empty stream rather than `NOT_FOUND`.
    #[tracing::instrument(skip_all, fields(user_id))]
    async fn get_todos_by_user(
        &self,
        request: Request<pb::UserIdRequest>,
    ) -> Result<Response<Self::GetTodosByUserStream>, Status> {
        let user_id = UserId::new(request.into_inner().user_id);
        tracing::Span::current().record("user_id", user_id.get());

        let todos: Vec<pb::Todo> = {
            let tracker = self.tracker.read().await;
            tracker.todos_by_user(user_id).cloned().map(Into::into).collect()
        };
        Ok(Response::new(stream_of(todos)))
    }

    #[tracing::instrument(skip_all)]
    async fn get_user_todos_with_projects(
        &self,
        request: Request<pb::UserIdRequest>,
    ) -> Result<Response<pb::UserTodosWithProjects>, Status> {
        let user_id = UserId::new(request.into_inner().user_id);
        let view = self
            .tracker
            .read()
            .await
            .user_todos_with_projects(user_id)
            .map_err(status_from)?;

        Ok(Response::new(view.into()))
    }
}
