//! Stored records
//!
//! Records are immutable once created; the tracker hands out clones or
//! shared references only.

use serde::{Deserialize, Serialize};

use super::{ProjectId, TodoId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

/// Project owned by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    /// Owner, checked to exist when the project was created
    pub user_id: UserId,
}

/// Todo owned by a user and filed under a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    /// Always false at creation; nothing flips it
    pub completed: bool,
    pub user_id: UserId,
    pub project_id: ProjectId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_shape_uses_user_id_and_project_id() {
        let todo = Todo {
            id: TodoId::new(1),
            title: "Design".into(),
            completed: false,
            user_id: UserId::new(1),
            project_id: ProjectId::new(2),
        };

        assert_eq!(
            serde_json::to_value(&todo).unwrap(),
            json!({"id": 1, "title": "Design", "completed": false, "userId": 1, "projectId": 2})
        );
    }
}
