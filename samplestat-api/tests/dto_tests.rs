use axum::{http::StatusCode, response::IntoResponse};
use samplestat_api::*;
use samplestat_core::{CoreError, SampleDraft, SampleId};
use serde_json::json;
use validator::Validate;

// ===== Response DTO Tests =====

#[test]
fn test_create_sample_response_message() {
    let response = CreateSampleResponse::new(SampleId::new(12));

    assert_eq!(response.id, SampleId::new(12));
    assert_eq!(
        response.message,
        "The request to add the distribution has been completed, and may be found with ID: 12"
    );
}

#[test]
fn test_create_sample_response_serialization() {
    let value = serde_json::to_value(CreateSampleResponse::new(SampleId::new(3))).unwrap();

    assert_eq!(value["id"], json!(3));
    assert!(value["message"].is_string());
}

#[test]
fn test_greeting_uses_hello_key() {
    let value = serde_json::to_value(GreetingResponse::default()).unwrap();
    assert!(value.get("Hello").is_some());
}

#[test]
fn test_create_request_is_sample_draft() {
    let request: CreateSampleRequest = serde_json::from_value(json!({
        "distributionType": "normal",
        "values": [1, 2],
        "loc": 1.0,
        "scale": 0.5
    }))
    .unwrap();

    assert!(request.validate().is_ok());
}

// ===== Error Mapping Tests =====

#[test]
fn test_validation_errors_become_readable_details() {
    let errors = SampleDraft::new(samplestat_core::DistributionType::Uniform, vec![])
        .validate()
        .unwrap_err();

    match ApiError::from(errors) {
        ApiError::Validation(details) => {
            assert!(details.contains("values: the sample has no values in the value list"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_core_error_status_mapping() {
    let cases = vec![
        (CoreError::Validation("bad".into()), StatusCode::BAD_REQUEST),
        (CoreError::InvalidId("x".into()), StatusCode::BAD_REQUEST),
        (CoreError::AlreadyExists("dup".into()), StatusCode::BAD_REQUEST),
        (CoreError::NotFound("gone".into()), StatusCode::NOT_FOUND),
        (CoreError::Database("down".into()), StatusCode::INTERNAL_SERVER_ERROR),
        (CoreError::Serialization("junk".into()), StatusCode::INTERNAL_SERVER_ERROR),
    ];

    for (error, expected) in cases {
        let response = ApiError::from(error).into_response();
        assert_eq!(response.status(), expected);
    }
}

#[test]
fn test_service_unavailable_status() {
    let response = ApiError::ServiceUnavailable("closed".into()).into_response();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
