//! GraphQL surface executed in-process against the schema

use async_graphql::Response;
use serde_json::{json, Value};
use trackctl_server::graphql::{build_schema, TrackerSchema};
use trackctl_server::AppState;

fn schema() -> TrackerSchema {
    build_schema(AppState::default().tracker().clone())
}

async fn run(schema: &TrackerSchema, query: &str) -> Response {
    schema.execute(query).await
}

fn data(response: Response) -> Value {
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    response.data.into_json().unwrap()
}

async fn seed_bob_with_website(schema: &TrackerSchema) {
    data(run(schema, r#"mutation { addUser(input: {name: "Bob"}) { id } }"#).await);
    data(
        run(
            schema,
            r#"mutation { addProject(input: {name: "Website", userId: "1"}) { id } }"#,
        )
        .await,
    );
    data(
        run(
            schema,
            r#"mutation { addTodo(input: {title: "Design", userId: "1", projectId: "1"}) { id } }"#,
        )
        .await,
    );
}

#[tokio::test]
async fn add_user_then_query() {
    let schema = schema();

    let created = data(
        run(&schema, r#"mutation { addUser(input: {name: "Alice"}) { id name } }"#).await,
    );
    assert_eq!(created, json!({"addUser": {"id": "1", "name": "Alice"}}));

    let listed = data(run(&schema, "{ users { id name } }").await);
    assert_eq!(listed, json!({"users": [{"id": "1", "name": "Alice"}]}));

    let single = data(run(&schema, r#"{ user(id: "1") { name } missing: user(id: "9") { name } }"#).await);
    assert_eq!(single, json!({"user": {"name": "Alice"}, "missing": null}));
}

#[tokio::test]
async fn add_project_for_unknown_user_errors() {
    let schema = schema();

    let response = run(
        &schema,
        r#"mutation { addProject(input: {name: "Website", userId: "42"}) { id } }"#,
    )
    .await;
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].message, "User not found");

    let body = serde_json::to_value(&response).unwrap();
    assert_eq!(body["errors"][0]["extensions"]["code"], "NOT_FOUND");

    let projects = data(run(&schema, "{ projects { id } }").await);
    assert_eq!(projects, json!({"projects": []}));
}

#[tokio::test]
async fn add_todo_for_unknown_project_errors() {
    let schema = schema();
    data(run(&schema, r#"mutation { addUser(input: {name: "Bob"}) { id } }"#).await);

    let response = run(
        &schema,
        r#"mutation { addTodo(input: {title: "Task", userId: "1", projectId: "3"}) { id } }"#,
    )
    .await;
    assert_eq!(response.errors[0].message, "Project not found");
}

#[tokio::test]
async fn empty_name_is_bad_user_input() {
    let schema = schema();

    let response = run(&schema, r#"mutation { addUser(input: {name: ""}) { id } }"#).await;
    assert_eq!(response.errors[0].message, "name cannot be empty");

    let body = serde_json::to_value(&response).unwrap();
    assert_eq!(body["errors"][0]["extensions"]["code"], "BAD_USER_INPUT");
}

#[tokio::test]
async fn nested_resolvers_follow_foreign_keys() {
    let schema = schema();
    seed_bob_with_website(&schema).await;

    let result = data(
        run(
            &schema,
            r#"{
                user(id: "1") { name projects { name } todos { title project { name } } }
                todo(id: "1") { completed user { name } }
                project(id: "1") { user { name } todos { title } }
            }"#,
        )
        .await,
    );

    assert_eq!(
        result,
        json!({
            "user": {
                "name": "Bob",
                "projects": [{"name": "Website"}],
                "todos": [{"title": "Design", "project": {"name": "Website"}}]
            },
            "todo": {"completed": false, "user": {"name": "Bob"}},
            "project": {"user": {"name": "Bob"}, "todos": [{"title": "Design"}]}
        })
    );
}

#[tokio::test]
async fn user_todos_with_projects_scopes_to_own_projects() {
    let schema = schema();
    seed_bob_with_website(&schema).await;
    data(run(&schema, r#"mutation { addUser(input: {name: "Carol"}) { id } }"#).await);
    data(
        run(
            &schema,
            r#"mutation { addProject(input: {name: "Secret", userId: "2"}) { id } }"#,
        )
        .await,
    );
    data(
        run(
            &schema,
            r#"mutation { addTodo(input: {title: "Task", userId: "1", projectId: "2"}) { id } }"#,
        )
        .await,
    );

    let result = data(
        run(
            &schema,
            r#"{ userTodosWithProjects(userId: "1") {
                user { name }
                projects { name userId }
                todos { todoTitle projectId projectName }
            } }"#,
        )
        .await,
    );

    assert_eq!(
        result,
        json!({"userTodosWithProjects": {
            "user": {"name": "Bob"},
            "projects": [{"name": "Website", "userId": "1"}],
            "todos": [
                {"todoTitle": "Design", "projectId": "1", "projectName": "Website"},
                {"todoTitle": "Task", "projectId": null, "projectName": null}
            ]
        }})
    );

    let response = run(&schema, r#"{ userTodosWithProjects(userId: "999") { user { id } } }"#).await;
    assert_eq!(response.errors[0].message, "User not found");
}
