use groupmeet_async::{Client, GroupmeetConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client_fast_retry(server: &MockServer) -> Client<GroupmeetConfig> {
    let config = GroupmeetConfig::new()
        .with_api_base(server.uri())
        .with_session("test-session");
    Client::with_config(config).with_backoff(
        backon::ExponentialBuilder::default()
            .with_min_delay(std::time::Duration::from_millis(10))
            .with_max_delay(std::time::Duration::from_millis(50))
            .with_max_times(3),
    )
}

#[tokio::test]
async fn retry_429_then_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/my-submissions"))
        .respond_with(
            ResponseTemplate::new(429).set_body_json(serde_json::json!({"error": "Too many requests"})),
        )
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/my-submissions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "submissions": [{"id": "s1", "course": "CIS1200"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let subs = test_client_fast_retry(&server)
        .submissions()
        .mine()
        .await
        .unwrap();
    assert_eq!(subs.len(), 1);
}

#[tokio::test]
async fn retry_500_then_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/my-groups"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/my-groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"groups": []})))
        .expect(1)
        .mount(&server)
        .await;

    let groups = test_client_fast_retry(&server).groups().mine().await.unwrap();
    assert!(groups.is_empty());
}

#[tokio::test]
async fn gives_up_after_max_times() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503))
        .expect(4)
        .mount(&server)
        .await;

    let err = test_client_fast_retry(&server)
        .session()
        .health()
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(503));
}

#[tokio::test]
async fn post_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/feedback"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = test_client_fast_retry(&server)
        .feedback()
        .create(&groupmeet_async::types::FeedbackRequest::new("m-1", "s1", 4))
        .await
        .unwrap_err();
    assert!(err.is_retryable());
}

#[tokio::test]
async fn read_conflict_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/my-groups"))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({"error": "Conflict"})))
        .expect(1)
        .mount(&server)
        .await;

    let err = test_client_fast_retry(&server).groups().mine().await.unwrap_err();
    assert_eq!(err.status_code(), Some(409));
    assert!(!err.is_retryable());
}
