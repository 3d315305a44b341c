#![deny(clippy::all, clippy::pedantic)]

use std::time::Duration;

use httpmock::MockServer;
use reqwest::{Method, StatusCode};
use serde_json::json;

use super::{ApiClient, ClientError};

fn client(server: &MockServer, prefix: &str) -> ApiClient {
    ApiClient::new(&server.url(prefix), Duration::from_secs(5)).expect("client")
}

#[test]
fn base_path_prefix_is_kept() -> Result<(), ClientError> {
    let client = ApiClient::new(
        "https://practice-react.sdetunicorns.com/api/test",
        Duration::from_secs(1),
    )?;
    assert_eq!(
        client.url("brands/42")?.as_str(),
        "https://practice-react.sdetunicorns.com/api/test/brands/42"
    );
    assert_eq!(
        client.url("/admin/login")?.as_str(),
        "https://practice-react.sdetunicorns.com/api/test/admin/login"
    );
    Ok(())
}

#[test]
fn invalid_base_url_is_rejected() {
    let err = ApiClient::new("not a url", Duration::from_secs(1)).expect_err("bad url");
    assert!(matches!(err, ClientError::Url(_)));
}

#[test]
fn request_is_not_sent_until_awaited() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.any_request();
        then.status(200);
    });

    let client = client(&server, "/api/test");
    let pending = client.get("brands");
    assert_eq!(pending.method(), &Method::GET);
    assert_eq!(pending.url(), server.url("/api/test/brands"));
    drop(pending);

    mock.assert_calls(0);
}

#[tokio::test]
async fn error_statuses_are_responses_not_errors() -> Result<(), ClientError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET").path("/api/test/brands/123456789012345678901234");
        then.status(404)
            .header("content-type", "application/json")
            .body(r#"{"error":"Brand not found."}"#);
    });

    let client = client(&server, "/api/test");
    let response = client.get("brands/123456789012345678901234").await?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.error(), Some("Brand not found."));
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn headers_and_query_are_attached_before_sending() -> Result<(), ClientError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/comments")
            .query_param("postId", "1")
            .query_param("limit", "10")
            .header("authorization", "Bearer abc")
            .header("x-trace", "spec");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"postId":1}]"#);
    });

    let client = client(&server, "/");
    let response = client
        .get("comments")
        .query(&[("postId", "1"), ("limit", "10")])
        .bearer("abc")
        .header("x-trace", "spec")
        .send()
        .await?;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.body()[0]["postId"], json!(1));
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn user_agent_identifies_the_suite() -> Result<(), ClientError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("DELETE")
            .path("/posts/1")
            .header("user-agent", ApiClient::user_agent());
        then.status(200).body("{}");
    });

    let response = client(&server, "/").delete("posts/1").await?;
    assert_eq!(response.body(), &json!({}));
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn unreadable_attachment_fails_before_sending() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.any_request();
        then.status(200);
    });

    let err = client(&server, "/api/test")
        .post("upload/single")
        .attach("single", "/nonexistent/beach.jpg")
        .await
        .expect_err("missing file");

    assert!(matches!(err, ClientError::Attachment { .. }));
    mock.assert_calls(0);
}

#[tokio::test]
async fn transport_failures_propagate() {
    let client = ApiClient::new("http://127.0.0.1:9", Duration::from_secs(2)).expect("client");
    let err = client.get("brands").await.expect_err("nothing listens there");
    assert!(matches!(err, ClientError::Http(_)));
}
