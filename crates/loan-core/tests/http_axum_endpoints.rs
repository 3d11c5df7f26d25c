//! Integration tests for HTTP Axum endpoints
//!
//! Drives the router end-to-end using tower::ServiceExt::oneshot

#![cfg(feature = "http-server")]

mod common;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use common::{FailingMerchantLookup, GENERATED_ID, build_use_case};
use loan_origination::{
    CreateLoanApplication, LoanApplicationId, ServiceConfig,
    infrastructure::{
        adapters::InMemoryProductCatalog,
        http::{LOAN_APPLICATIONS_PATH, LoanAppState, create_loan_router},
    },
};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tower::ServiceExt;

const MERCHANT_HEADER: &str = "X-Custom-MerchantId";

fn app_with(use_case: CreateLoanApplication, config: &ServiceConfig) -> Router {
    let state = LoanAppState::new(Arc::new(use_case), config).unwrap();
    create_loan_router(state)
}

fn app() -> Router {
    app_with(build_use_case(), &ServiceConfig::default())
}

fn submit(merchant_id: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .uri(LOAN_APPLICATIONS_PATH)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(merchant_id) = merchant_id {
        builder = builder.header(MERCHANT_HEADER, merchant_id);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn json_body(response: axum::response::Response) -> JsonValue {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

// ===== Loan Application Endpoint Tests =====

#[tokio::test]
async fn test_create_loan_application_success() {
    let request = submit(
        Some("123"),
        r#"{"productId":"123","language":"fr","purchaseAmount":40000}"#,
    );

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(location, format!("{LOAN_APPLICATIONS_PATH}/{GENERATED_ID}"));

    let json = json_body(response).await;
    assert_eq!(json["loanApplicationId"], GENERATED_ID);
    assert_eq!(json["authenticationUrl"], "www.djf.com");
}

#[tokio::test]
async fn test_authentication_url_comes_from_config() {
    let config = ServiceConfig::default().with_authentication_url("https://auth.example.com");
    let request = submit(
        Some("123"),
        r#"{"productId":"123","language":"nl","purchaseAmount":1}"#,
    );

    let response = app_with(build_use_case(), &config)
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = json_body(response).await;
    assert_eq!(json["authenticationUrl"], "https://auth.example.com");
}

#[tokio::test]
async fn test_header_name_is_case_insensitive() {
    let request = Request::builder()
        .uri(LOAN_APPLICATIONS_PATH)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-custom-merchantid", "123")
        .body(Body::from(
            r#"{"productId":"123","language":"fr","purchaseAmount":40000}"#,
        ))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_rejections_map_to_bad_request() {
    let cases = [
        (
            "999",
            r#"{"productId":"123","language":"fr","purchaseAmount":40000}"#,
            "MerchantNotFound",
        ),
        (
            "123",
            r#"{"productId":"999","language":"fr","purchaseAmount":40000}"#,
            "ProductNotFound",
        ),
        (
            "123",
            r#"{"productId":"123","language":"fr","purchaseAmount":-40000}"#,
            "InvalidPurchaseAmount",
        ),
        (
            "123",
            r#"{"productId":"123","language":"fr","purchaseAmount":60000}"#,
            "PurchaseAmountOutOfRange",
        ),
        (
            "123",
            r#"{"productId":"123","language":"en","purchaseAmount":40000}"#,
            "InvalidLanguage",
        ),
    ];

    for (merchant_id, body, expected) in cases {
        let response = app().oneshot(submit(Some(merchant_id), body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{expected}");
        let json = json_body(response).await;
        assert_eq!(json["type"], expected);
        assert!(json["message"].as_str().is_some_and(|m| !m.is_empty()));
    }
}

#[tokio::test]
async fn test_malformed_bodies_are_rejected() {
    for body in ["", "{", r#"{""}"#, r#"{"hello": "world"}"#] {
        let response = app().oneshot(submit(Some("123"), body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body:?}");
        let json = json_body(response).await;
        assert_eq!(json["type"], "InvalidRequestBody");
    }
}

#[tokio::test]
async fn test_missing_merchant_header() {
    let request = submit(
        None,
        r#"{"productId":"123","language":"fr","purchaseAmount":40000}"#,
    );

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["type"], "MissingMerchantId");
}

#[tokio::test]
async fn test_empty_merchant_header_reaches_use_case() {
    let request = submit(
        Some(""),
        r#"{"productId":"123","language":"fr","purchaseAmount":40000}"#,
    );

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["type"], "MerchantNotFound");
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let config = ServiceConfig::default().with_max_body_bytes(16);
    let request = submit(
        Some("123"),
        r#"{"productId":"123","language":"fr","purchaseAmount":40000}"#,
    );

    let response = app_with(build_use_case(), &config)
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["type"], "InvalidRequestBody");
}

#[tokio::test]
async fn test_collaborator_fault_maps_to_internal_error() {
    let use_case = CreateLoanApplication::new(
        Arc::new(|| LoanApplicationId::new(GENERATED_ID)),
        Arc::new(FailingMerchantLookup::default()),
        Arc::new(InMemoryProductCatalog::new()),
    );
    let request = submit(
        Some("123"),
        r#"{"productId":"123","language":"fr","purchaseAmount":40000}"#,
    );

    let response = app_with(use_case, &ServiceConfig::default())
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = json_body(response).await;
    assert_eq!(json["type"], "InternalError");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let request = Request::builder()
        .uri("/api/v1/unknown")
        .method("GET")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ===== Health Endpoint Tests =====

#[tokio::test]
async fn test_health_check() {
    let request = Request::builder()
        .uri("/health")
        .method("GET")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["status"], "ok");
}

#[test]
fn test_invalid_header_config_is_refused() {
    let config = ServiceConfig::default().with_merchant_header("bad header");
    let result = LoanAppState::new(Arc::new(build_use_case()), &config);
    assert!(result.is_err());
}
