//! Creation inputs
//!
//! Every field is optional so transports can pass through exactly what the
//! caller sent; the tracker decides what is missing. The REST adapter
//! deserializes request bodies straight into these.

use serde::Deserialize;

use super::{ProjectId, UserId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewUser {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewProject {
    pub name: Option<String>,
    pub user_id: Option<UserId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewTodo {
    pub title: Option<String>,
    pub user_id: Option<UserId>,
    pub project_id: Option<ProjectId>,
}

impl NewUser {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

impl NewProject {
    pub fn new(name: impl Into<String>, user_id: UserId) -> Self {
        Self {
            name: Some(name.into()),
            user_id: Some(user_id),
        }
    }
}

impl NewTodo {
    pub fn new(title: impl Into<String>, user_id: UserId, project_id: ProjectId) -> Self {
        Self {
            title: Some(title.into()),
            user_id: Some(user_id),
            project_id: Some(project_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_as_none() {
        let input: NewTodo = serde_json::from_str(r#"{"title": "Task"}"#).unwrap();
        assert_eq!(input.title.as_deref(), Some("Task"));
        assert_eq!(input.user_id, None);
        assert_eq!(input.project_id, None);
    }

    #[test]
    fn camel_case_keys() {
        let input: NewProject =
            serde_json::from_str(r#"{"name": "Website", "userId": 1}"#).unwrap();
        assert_eq!(input, NewProject::new("Website", UserId::new(1)));
    }
}
