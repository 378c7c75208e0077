//! End-to-end tests for the user lookup endpoint.

use std::time::Duration;

use serde_json::{json, Value};

use directory_proxy::config::ServiceConfig;

mod common;

#[tokio::test]
async fn user_lookup_returns_enveloped_user() {
    let directory = common::start_mock_directory(r#"{"login":"octocat"}"#, Duration::ZERO).await;

    let config = ServiceConfig {
        github_api_base_url: format!("http://{directory}"),
        ..ServiceConfig::default()
    };
    let (addr, _shutdown, _task) = common::spawn_service(config).await;

    let response = common::client()
        .get(format!("http://{addr}/api/users/octocat"))
        .send()
        .await
        .expect("service unreachable");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({"message": "", "data": {"login": "octocat"}, "status": 200})
    );
}

#[tokio::test]
async fn unreachable_collaborator_yields_error_envelope() {
    // Nothing listens on port 1.
    let config = ServiceConfig {
        github_api_base_url: "http://127.0.0.1:1".to_string(),
        ..ServiceConfig::default()
    };
    let (addr, _shutdown, _task) = common::spawn_service(config).await;

    let response = common::client()
        .get(format!("http://{addr}/api/users/octocat"))
        .send()
        .await
        .expect("service unreachable");

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({"message": "Error occured", "data": null, "status": 500})
    );
}

#[tokio::test]
async fn extra_collaborator_fields_survive_the_envelope() {
    let directory = common::start_mock_directory(
        r#"{"login":"octocat","id":583231,"name":"The Octocat"}"#,
        Duration::ZERO,
    )
    .await;

    let config = ServiceConfig {
        github_api_base_url: format!("http://{directory}"),
        ..ServiceConfig::default()
    };
    let (addr, _shutdown, _task) = common::spawn_service(config).await;

    let body: Value = common::client()
        .get(format!("http://{addr}/api/users/octocat"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["data"]["login"], "octocat");
    assert_eq!(body["data"]["id"], 583231);
    assert_eq!(body["data"]["name"], "The Octocat");
}
