use groupmeet_async::{Client, GroupmeetConfig};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn health_reports_ok() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok",
            "message": "GroupMeet API is running"
        })))
        .mount(&server)
        .await;

    let client = Client::with_config(GroupmeetConfig::new().with_api_base(server.uri()));
    let health = client.session().health().await.unwrap();
    assert!(health.is_ok());
}

#[tokio::test]
async fn status_with_session() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/status"))
        .and(header("cookie", "session=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "authenticated": true,
            "pennkey": "ana",
            "is_admin": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = GroupmeetConfig::new()
        .with_api_base(server.uri())
        .with_session("abc");
    let status = Client::with_config(config).session().status().await.unwrap();

    assert!(status.authenticated);
    assert_eq!(status.pennkey.as_deref(), Some("ana"));
    assert!(!status.dev_mode);
}

#[tokio::test]
async fn status_without_session_still_asks_server() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/status"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"authenticated": false})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = GroupmeetConfig::new()
        .with_api_base(server.uri())
        .with_session("");
    let status = Client::with_config(config).session().status().await.unwrap();
    assert!(!status.authenticated);
    assert_eq!(status.pennkey, None);
}
