use super::*;
use std::error::Error as StdError;

#[test]
fn test_api_error() {
    let error = Error::ApiError();

    assert_eq!(error.to_string(), "API request failed");
    assert!(error.source().is_none());
}

#[test]
fn test_invalid_base_url_error() {
    let error = Error::InvalidBaseUrl("not a url".to_string());

    assert_eq!(
        error.to_string(),
        "Invalid GitHub API base URL: not a url"
    );
    assert!(error.source().is_none());
}

#[test]
fn test_invalid_response_error() {
    let error = Error::InvalidResponse;

    assert_eq!(error.to_string(), "Invalid response format");
    assert!(error.source().is_none());
}

#[test]
fn test_not_found_error() {
    let error = Error::NotFound;

    assert_eq!(error.to_string(), "Resource not found");
}

#[test]
fn test_rate_limit_exceeded_error() {
    let error = Error::RateLimitExceeded;

    assert_eq!(error.to_string(), "Rate limit exceeded");
}
