//! trackctl-core: the in-memory tracker shared by every transport
//!
//! Holds users, projects and todos in insertion order, hands out
//! monotonically increasing ids per entity type and checks foreign keys
//! at creation time. The REST, GraphQL and gRPC adapters in
//! `trackctl-server` are thin translations onto [`Tracker`].

pub mod error;
pub mod models;
pub mod tracker;

pub use error::{Resource, Result, TrackerError};
pub use models::{
    NewProject, NewTodo, NewUser, Project, ProjectId, Todo, TodoId, TodoWithProject, User,
    UserId, UserTodosWithProjects, ValidationError,
};
pub use tracker::Tracker;
