use super::*;
use chrono::{TimeZone, Utc};

fn plain() {
    colored::control::set_override(false);
}

fn octocat() -> UserProfile {
    UserProfile {
        id: 583231,
        login: "octocat".to_string(),
        name: Some("The Octocat".to_string()),
        avatar_url: "https://avatars.githubusercontent.com/u/583231".to_string(),
        html_url: "https://github.com/octocat".to_string(),
        bio: Some("Mascot".to_string()),
        company: Some("@github".to_string()),
        location: Some("San Francisco".to_string()),
        blog: Some("https://github.blog".to_string()),
        public_repos: 8,
        followers: 1000,
        following: 9,
        created_at: Some(Utc.with_ymd_and_hms(2011, 1, 25, 18, 44, 36).unwrap()),
    }
}

fn favorite(id: u64, login: &str, name: Option<&str>) -> FavoriteUser {
    FavoriteUser {
        id,
        login: login.to_string(),
        name: name.map(str::to_string),
        avatar_url: format!("https://avatars.example/{}", id),
        html_url: format!("https://github.com/{}", login),
    }
}

#[test]
fn test_format_profile_pretty_full() {
    plain();
    let profile = octocat();
    let output = format_profile_pretty(&ProfileView {
        profile: &profile,
        favorite: false,
    });

    assert!(output.contains("The Octocat @octocat"));
    assert!(output.contains("Mascot"));
    assert!(output.contains("Location: San Francisco"));
    assert!(output.contains("Company: @github"));
    assert!(output.contains("Blog: https://github.blog"));
    assert!(output.contains("Joined 2011"));
    assert!(output.contains("8 Repositories  1000 Followers  9 Following"));
    assert!(output.contains("https://github.com/octocat"));
    assert!(!output.contains("Favorite"));
}

#[test]
fn test_format_profile_pretty_minimal() {
    plain();
    let mut profile = octocat();
    profile.name = None;
    profile.bio = None;
    profile.company = None;
    profile.location = Some(String::new());
    profile.blog = Some(String::new());
    profile.created_at = None;

    let output = format_profile_pretty(&ProfileView {
        profile: &profile,
        favorite: true,
    });

    assert!(output.contains("octocat @octocat"));
    assert!(output.contains("★ Favorite"));
    assert!(!output.contains("Location"));
    assert!(!output.contains("Company"));
    assert!(!output.contains("Blog"));
    assert!(!output.contains("Joined"));
}

#[test]
fn test_render_json_includes_favorite_flag() {
    let profile = octocat();
    let view = ProfileView {
        profile: &profile,
        favorite: true,
    };

    let output = render(&view, "json", format_profile_pretty).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["login"], "octocat");
    assert_eq!(value["id"], 583231);
    assert_eq!(value["favorite"], true);
}

#[test]
fn test_render_rejects_unknown_format() {
    let profile = octocat();
    let view = ProfileView {
        profile: &profile,
        favorite: false,
    };

    let result = render(&view, "yaml", format_profile_pretty);

    match result {
        Err(Error::InvalidArguments(msg)) => assert!(msg.contains("'yaml'")),
        other => panic!("Expected InvalidArguments, got {:?}", other),
    }
}

#[test]
fn test_format_favorites_pretty_numbers_from_one() {
    plain();
    let favorites = vec![
        favorite(1, "octocat", Some("The Octocat")),
        favorite(2, "hubot", None),
    ];

    let output = format_favorites_pretty(&favorites);

    assert!(output.contains("  1. The Octocat @octocat"));
    assert!(output.contains("  2. hubot @hubot"));
}

#[test]
fn test_format_favorites_pretty_empty() {
    plain();
    assert_eq!(format_favorites_pretty(&[]), "No favorites yet\n");
}

#[test]
fn test_format_suggestions() {
    assert_eq!(
        format_suggestions(&["octo-1".to_string(), "octo-2".to_string()]),
        "octo-1\nocto-2\n"
    );
    assert_eq!(format_suggestions(&[]), "No results found.\n");
}

#[test]
fn test_format_notification() {
    plain();
    let user = favorite(1, "octocat", Some("The Octocat"));

    assert_eq!(
        format_notification(&Notification::favorite_added(&user)),
        "Added to favorites: The Octocat has been added to your favorites."
    );
    assert_eq!(
        format_notification(&Notification::error("Error", "User not found.")),
        "Error: User not found."
    );
}
