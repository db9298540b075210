use super::*;
use crate::test_support::{profile, session, StubDirectory};
use profile_finder_core::{FavoriteUser, NotificationKind, SearchFailure};

fn args(login: &str, format: &str) -> LookupArgs {
    LookupArgs {
        login: login.to_string(),
        format: format.to_string(),
    }
}

#[tokio::test]
async fn test_lookup_renders_profile() {
    colored::control::set_override(false);
    let (session, _temp_dir) =
        session(StubDirectory::new().with_user(profile(1, "octocat", Some("The Octocat"))));

    let output = execute(&session, &args("octocat", "pretty")).await.unwrap();

    assert!(output.contains("The Octocat @octocat"));
    assert!(output.contains("3 Repositories  10 Followers  1 Following"));
    assert!(session.drain_notifications().is_empty());
}

#[tokio::test]
async fn test_lookup_json_marks_favorite() {
    let (mut session, _temp_dir) =
        session(StubDirectory::new().with_user(profile(1, "octocat", None)));
    session
        .finder
        .favorites_mut()
        .add(FavoriteUser::from(&profile(1, "octocat", None)))
        .unwrap();

    let output = execute(&session, &args("octocat", "json")).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["login"], "octocat");
    assert_eq!(value["favorite"], true);
}

#[tokio::test]
async fn test_lookup_unknown_user_notifies_and_fails() {
    let (session, _temp_dir) = session(StubDirectory::new());

    let result = execute(&session, &args("ghost", "pretty")).await;

    assert!(matches!(
        result,
        Err(Error::Search(SearchFailure::UserNotFound))
    ));
    let notifications = session.drain_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::Error);
    assert_eq!(notifications[0].description, "User not found.");
}

#[tokio::test]
async fn test_lookup_transport_failure() {
    let (session, _temp_dir) = session(StubDirectory::failing());

    let result = execute(&session, &args("octocat", "pretty")).await;

    assert!(matches!(
        result,
        Err(Error::Search(SearchFailure::FetchFailed))
    ));
}

#[tokio::test]
async fn test_lookup_blank_login() {
    let (session, _temp_dir) = session(StubDirectory::new());

    let result = execute(&session, &args("   ", "pretty")).await;

    assert!(matches!(result, Err(Error::Search(SearchFailure::EmptyLogin))));
}
