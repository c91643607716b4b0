//! gRPC surface
//!
//! Unary `AddUser`/`AddProject`/`AddTodo`/`GetUserTodosWithProjects` and
//! server-streaming `GetUsers`/`GetProjects`/`GetTodos`/`GetTodosByUser`.
//! Streams are built from a snapshot taken under the read lock, one
//! message per entity, then closed.

pub mod convert;
pub mod server;
pub mod service;

/// Generated protobuf types and service stubs
pub mod pb {
    tonic::include_proto!("tracker");
}

pub use server::run_grpc;
pub use service::TrackerGrpc;
