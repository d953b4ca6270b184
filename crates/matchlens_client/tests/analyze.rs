use std::time::Duration;

use bytes::Bytes;
use matchlens_client::{
    AnalyzeBackend, AnalyzeRequest, FailureKind, HttpAnalyzeBackend, ServiceSettings,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_request() -> AnalyzeRequest {
    AnalyzeRequest {
        file_name: "resume.pdf".to_string(),
        mime_type: "application/pdf".to_string(),
        resume: Bytes::from_static(b"%PDF-1.4 sample resume"),
        job_description: "j".repeat(200),
        experience_level: "experienced".to_string(),
    }
}

fn backend_for(server: &MockServer) -> HttpAnalyzeBackend {
    let settings = ServiceSettings {
        base_url: server.uri(),
        ..ServiceSettings::default()
    };
    HttpAnalyzeBackend::new(settings).expect("backend builds")
}

fn report_body() -> serde_json::Value {
    serde_json::json!({
        "matchScore": 78,
        "skillsMatchPercent": 80,
        "experienceMatchPercent": 75,
        "keywordMatchPercent": 70,
        "experienceLevel": "experienced",
        "summary": "Moderate match with 78% overall compatibility.",
        "strengths": ["Strong technical skill alignment"],
        "areasForImprovement": ["Add more role-specific keywords"],
        "processingTime": 12.41
    })
}

#[tokio::test]
async fn analyze_sends_multipart_form_and_parses_report() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .and(body_string_contains("name=\"resume\""))
        .and(body_string_contains("filename=\"resume.pdf\""))
        .and(body_string_contains("name=\"jobDescription\""))
        .and(body_string_contains("name=\"experienceLevel\""))
        .and(body_string_contains("experienced"))
        .respond_with(ResponseTemplate::new(200).set_body_json(report_body()))
        .expect(1)
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let report = backend
        .analyze(&sample_request())
        .await
        .expect("analysis ok");

    assert_eq!(report.match_score, 78);
    assert_eq!(report.skills_match_percent, 80);
    assert_eq!(report.experience_match_percent, 75);
    assert_eq!(report.keyword_match_percent, 70);
    assert_eq!(report.experience_level, "experienced");
    assert_eq!(report.strengths.len(), 1);
    assert_eq!(report.areas_for_improvement.len(), 1);
    assert_eq!(report.processing_time, Some(12.41));
}

#[tokio::test]
async fn missing_processing_time_is_tolerated() {
    let server = MockServer::start().await;
    let mut body = report_body();
    body.as_object_mut().unwrap().remove("processingTime");
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let report = backend
        .analyze(&sample_request())
        .await
        .expect("analysis ok");

    assert_eq!(report.processing_time, None);
}

#[tokio::test]
async fn service_unavailable_maps_to_its_kind() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let err = backend.analyze(&sample_request()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::ServiceUnavailable);
}

#[tokio::test]
async fn bad_gateway_also_maps_to_service_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let err = backend.analyze(&sample_request()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::ServiceUnavailable);
}

#[tokio::test]
async fn payload_too_large_maps_to_its_kind() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(413))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let err = backend.analyze(&sample_request()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::PayloadTooLarge);
}

#[tokio::test]
async fn upstream_timeout_maps_to_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(504))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let err = backend.analyze(&sample_request()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn backend_error_message_passes_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({ "error": "No job description provided" })),
        )
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let err = backend.analyze(&sample_request()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(400));
    assert_eq!(err.message, "No job description provided");
}

#[tokio::test]
async fn client_side_timeout_maps_to_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(report_body()),
        )
        .mount(&server)
        .await;

    let settings = ServiceSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..ServiceSettings::default()
    };
    let backend = HttpAnalyzeBackend::new(settings).expect("backend builds");
    let err = backend.analyze(&sample_request()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn unparseable_success_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let err = backend.analyze(&sample_request()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedResponse);
}

#[tokio::test]
async fn connection_refused_maps_to_network() {
    let settings = ServiceSettings {
        // Nothing listens here; the connection is refused immediately.
        base_url: "http://127.0.0.1:1".to_string(),
        ..ServiceSettings::default()
    };
    let backend = HttpAnalyzeBackend::new(settings).expect("backend builds");
    let err = backend.analyze(&sample_request()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}
