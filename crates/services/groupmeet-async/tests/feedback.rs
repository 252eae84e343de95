use groupmeet_async::types::FeedbackRequest;
use groupmeet_async::{Client, GroupmeetConfig, GroupmeetError};
use groupmeet_core::ValidationError;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> Client<GroupmeetConfig> {
    Client::with_config(GroupmeetConfig::new().with_api_base(server.uri()))
}

#[tokio::test]
async fn feedback_posts_rating_and_comments() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/feedback"))
        .and(body_json(serde_json::json!({
            "match_id": "m-1",
            "student_id": "s1",
            "rating": 5,
            "comments": "Great group!"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok",
            "message": "Feedback submitted successfully"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = test_client(&server)
        .feedback()
        .create(&FeedbackRequest::new("m-1", "s1", 5).with_comments("Great group!"))
        .await
        .unwrap();

    assert_eq!(resp.message, "Feedback submitted successfully");
}

#[tokio::test]
async fn out_of_range_rating_is_rejected_locally() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/feedback"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = test_client(&server)
        .feedback()
        .create(&FeedbackRequest::new("m-1", "s1", 6))
        .await
        .unwrap_err();

    let GroupmeetError::Validation(errors) = err else {
        panic!("expected validation error");
    };
    assert_eq!(errors.errors(), &[ValidationError::RatingOutOfRange(6)]);
}
