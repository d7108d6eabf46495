use crate::ApiError;

use std::panic::Location;

use axum::{http::StatusCode, response::IntoResponse};
use error_location::ErrorLocation;
use http_body_util::BodyExt;
use serde_json::Value;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

#[tokio::test]
async fn test_validation_error_produces_400_with_field() {
    let error = ApiError::Validation {
        message: "Limit must be a positive integer.".to_string(),
        field: Some("limit".into()),
        location: here(),
    };

    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["message"], "Limit must be a positive integer.");
    assert_eq!(json["error"]["field"], "limit");
}

#[tokio::test]
async fn test_validation_error_without_field_omits_field_key() {
    let error = ApiError::Validation {
        message: "bad input".to_string(),
        field: None,
        location: here(),
    };

    let json = body_json(error.into_response()).await;
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_bad_request_produces_400() {
    let error = ApiError::BadRequest {
        message: "malformed body".to_string(),
        location: here(),
    };

    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_internal_error_produces_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".to_string(),
        location: here(),
    };

    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Database operation failed");
}

#[tokio::test]
async fn test_core_error_maps_to_invalid_csv_format() {
    let core_error = uinfo_core::CoreError::InvalidAge {
        line: 3,
        value: "abc".to_string(),
        location: here(),
    };

    let error = ApiError::from(core_error);
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["message"], "Invalid CSV format");
    assert_eq!(json["error"]["field"], "file");
}
