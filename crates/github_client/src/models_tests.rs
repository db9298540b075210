use super::*;
use serde_json::{from_str, json};

fn octocat_json() -> serde_json::Value {
    json!({
        "id": 583231,
        "login": "octocat",
        "name": "The Octocat",
        "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
        "html_url": "https://github.com/octocat",
        "public_repos": 8,
        "followers": 1000,
        "following": 9
    })
}

#[test]
fn test_user_profile_deserialization_minimal_fields() {
    let profile: UserProfile =
        serde_json::from_value(octocat_json()).expect("Failed to deserialize UserProfile");

    assert_eq!(profile.id, 583231);
    assert_eq!(profile.login, "octocat");
    assert_eq!(profile.name.as_deref(), Some("The Octocat"));
    assert_eq!(profile.html_url, "https://github.com/octocat");
    assert_eq!(profile.public_repos, 8);
    assert_eq!(profile.followers, 1000);
    assert_eq!(profile.following, 9);
    assert!(profile.bio.is_none());
    assert!(profile.created_at.is_none());
}

#[test]
fn test_user_profile_deserialization_ignores_unknown_fields() {
    let json_str = r#"{
        "id": 1,
        "login": "mojombo",
        "node_id": "MDQ6VXNlcjE=",
        "type": "User",
        "site_admin": false,
        "name": null,
        "avatar_url": "https://avatars.githubusercontent.com/u/1?v=4",
        "html_url": "https://github.com/mojombo",
        "company": "@chatterbugapp",
        "blog": "http://tom.preston-werner.com",
        "location": "San Francisco",
        "bio": null,
        "public_repos": 66,
        "followers": 24000,
        "following": 11,
        "created_at": "2007-10-20T05:24:19Z"
    }"#;

    let profile: UserProfile = from_str(json_str).expect("Failed to deserialize UserProfile");

    assert_eq!(profile.name, None);
    assert_eq!(profile.company.as_deref(), Some("@chatterbugapp"));
    assert_eq!(profile.location.as_deref(), Some("San Francisco"));
    assert_eq!(profile.joined_year(), Some(2007));
}

#[test]
fn test_user_profile_missing_login_fails() {
    let json_str = r#"{"id": 1, "avatar_url": "a", "html_url": "b"}"#;

    let result: Result<UserProfile, _> = from_str(json_str);

    assert!(result.is_err());
}

#[test]
fn test_display_name_falls_back_to_login() {
    let mut profile: UserProfile = serde_json::from_value(octocat_json()).unwrap();
    assert_eq!(profile.display_name(), "The Octocat");

    profile.name = Some(String::new());
    assert_eq!(profile.display_name(), "octocat");

    profile.name = None;
    assert_eq!(profile.display_name(), "octocat");
}

#[test]
fn test_blog_url_normalization() {
    let mut profile: UserProfile = serde_json::from_value(octocat_json()).unwrap();
    assert_eq!(profile.blog_url(), None);

    profile.blog = Some(String::new());
    assert_eq!(profile.blog_url(), None);

    profile.blog = Some("example.com".to_string());
    assert_eq!(profile.blog_url().as_deref(), Some("https://example.com"));

    profile.blog = Some("http://example.com/blog".to_string());
    assert_eq!(profile.blog_url().as_deref(), Some("http://example.com/blog"));
}

#[test]
fn test_search_results_into_logins_respects_order_and_limit() {
    let results: UserSearchResults = serde_json::from_value(json!({
        "total_count": 7,
        "incomplete_results": false,
        "items": [
            { "id": 1, "login": "octocat" },
            { "id": 2, "login": "octo" },
            { "id": 3, "login": "octopus" },
            { "id": 4, "login": "octavia" }
        ]
    }))
    .expect("Failed to deserialize UserSearchResults");

    assert_eq!(results.total_count, 7);
    assert_eq!(results.into_logins(3), vec!["octocat", "octo", "octopus"]);
}

#[test]
fn test_search_results_empty_items() {
    let results: UserSearchResults =
        from_str(r#"{"total_count": 0, "items": []}"#).expect("Failed to deserialize");

    assert!(results.into_logins(5).is_empty());
}
