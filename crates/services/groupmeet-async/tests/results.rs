use groupmeet_async::types::ResultsResponse;
use groupmeet_async::{Client, GroupmeetConfig, GroupmeetError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn anonymous_client(server: &MockServer) -> Client<GroupmeetConfig> {
    Client::with_config(GroupmeetConfig::new().with_api_base(server.uri()))
}

#[tokio::test]
async fn matched_student_gets_group_and_feedback_ids() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/results/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "student": {
                "id": "s1",
                "name": "Ana",
                "email": "ana@upenn.edu",
                "course": "CIS1200",
                "study_preference": "PSets"
            },
            "group_members": [
                {"id": "s2", "name": "Ben", "email": "ben@upenn.edu", "study_preference": "Discussion"},
                {"id": "s3", "name": "Cara", "email": "cara@upenn.edu"}
            ],
            "availability_overlap": 0.8,
            "preference_alignment": 0.5,
            "avg_compatibility": 0.65,
            "match_id": "m-1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = anonymous_client(&server).groups().results("s1").await.unwrap();
    let group = resp.group().unwrap();
    assert_eq!(group.match_id, "m-1");
    assert_eq!(group.student.id, "s1");
    assert_eq!(group.student.course.as_deref(), Some("CIS1200"));
    assert_eq!(group.others().count(), 2);
    assert!((group.avg_compatibility - 0.65).abs() < f64::EPSILON);
}

#[tokio::test]
async fn unmatched_student_gets_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/results/s9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "student": {"id": "s9", "name": "Dee", "email": "dee@upenn.edu"},
            "message": "No matches found yet"
        })))
        .mount(&server)
        .await;

    let resp = anonymous_client(&server).groups().results("s9").await.unwrap();
    assert!(resp.group().is_none());
    assert_eq!(resp.student().name.as_deref(), Some("Dee"));
    let ResultsResponse::Waiting { message, .. } = resp else {
        panic!("expected waiting response");
    };
    assert_eq!(message, "No matches found yet");
}

#[tokio::test]
async fn unknown_student_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/results/nobody"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"error": "Student not found"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = anonymous_client(&server)
        .groups()
        .results("nobody")
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(404));
    let GroupmeetError::Api(obj) = err else {
        panic!("expected api error");
    };
    assert_eq!(obj.error, "Student not found");
}
