//! Domain models with validation at construction
//!
//! Inputs arrive with every field optional so that each transport can hand
//! over exactly what the caller sent. Presence and emptiness are checked
//! here, once, instead of in every adapter.

pub mod entities;
pub mod ids;
pub mod input;
pub mod join;
pub mod text;
pub mod validation;

pub use entities::{Project, Todo, User};
pub use ids::{ProjectId, TodoId, UserId};
pub use input::{NewProject, NewTodo, NewUser};
pub use join::{TodoWithProject, UserTodosWithProjects};
pub use text::NonEmptyText;
pub use validation::ValidationError;
