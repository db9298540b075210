use super::*;
use std::error::Error as StdError;

#[test]
fn test_storage_error_message() {
    let error = Error::storage("github-favorites", "permission denied");

    assert_eq!(
        error.to_string(),
        "Failed to access stored data for key 'github-favorites': permission denied"
    );
    assert!(error.source().is_none());
}

#[test]
fn test_invalid_reorder_message() {
    let error = Error::InvalidReorder("expected 2 favorites, got 3".to_string());

    assert_eq!(
        error.to_string(),
        "Reorder rejected: expected 2 favorites, got 3"
    );
}

#[test]
fn test_serialization_error_keeps_source() {
    let json_error = serde_json::from_str::<Vec<u64>>("[1,").unwrap_err();
    let error = Error::from(json_error);

    assert!(error.to_string().starts_with("Failed to serialize favorites:"));
    assert!(error.source().is_some());
}

#[test]
fn test_favorite_not_found_message() {
    let error = Error::FavoriteNotFound("octocat".to_string());

    assert_eq!(error.to_string(), "Favorite not found: octocat");
}
