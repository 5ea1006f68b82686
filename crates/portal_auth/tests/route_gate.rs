#![allow(clippy::unwrap_used, clippy::expect_used)]

use anyhow::Result;
use portal_auth::{
    Credentials, GuardDecision, PathClass, Role, RouteCategory, Session, SessionStore,
    guard::{category_for_path, paths},
    nav,
};
use test_support::{FakeAuthApi, MemoryStore, auth_response, profile};

/// What the router would show at `path` for the given snapshot.
fn visit(path: &str, session: &Session) -> GuardDecision {
    match category_for_path(path) {
        PathClass::Guarded(category) => category.decide(session),
        PathClass::Unguarded => GuardDecision::Render,
        PathClass::ToLogin => GuardDecision::Redirect(paths::LOGIN),
    }
}

fn credentials() -> Credentials {
    Credentials {
        email: "jane.doe@paruluniversity.ac.in".to_string(),
        password: "Abcdef1!".to_string(),
    }
}

#[tokio::test]
async fn student_walks_through_the_portal() -> Result<()> {
    let api = FakeAuthApi::new();
    let storage = MemoryStore::new();
    api.accept_login(Role::Student, auth_response("Jane Doe", "student-token"));
    let store = SessionStore::new(api.clone(), storage.clone());

    assert_eq!(
        visit(paths::STUDENT_HOME, &store.snapshot()),
        GuardDecision::Loading
    );

    store.restore().await;
    let signed_out = store.snapshot();
    assert_eq!(visit(paths::LOGIN, &signed_out), GuardDecision::Render);
    assert_eq!(
        visit(paths::STUDENT_CHALLENGES, &signed_out),
        GuardDecision::Redirect(paths::LOGIN)
    );

    store.login_as_student(&credentials()).await?;
    let signed_in = store.snapshot();
    assert_eq!(
        visit(paths::LOGIN, &signed_in),
        GuardDecision::Redirect(paths::STUDENT_HOME)
    );
    assert_eq!(
        visit(&paths::student_challenge("c1"), &signed_in),
        GuardDecision::Render
    );
    assert_eq!(
        visit(paths::ADMIN_PENDING_SUBMISSIONS, &signed_in),
        GuardDecision::Redirect(paths::LOGIN)
    );
    assert_eq!(
        visit(&paths::reset_password("abc123"), &signed_in),
        GuardDecision::Render
    );

    store.logout().await;
    assert_eq!(
        visit(paths::STUDENT_HOME, &store.snapshot()),
        GuardDecision::Redirect(paths::LOGIN)
    );
    Ok(())
}

#[test]
fn admin_sidebar_tracks_the_review_pages() {
    let session = Session::authenticated(Role::Admin, profile("Root Admin"));
    let role = session.role().unwrap();
    let entries = nav::entries_for(role);

    let active = |path: &str| -> Vec<&str> {
        entries
            .iter()
            .zip(nav::active_flags(entries, path))
            .filter_map(|(entry, active)| active.then_some(entry.label))
            .collect()
    };

    assert_eq!(visit(paths::ADMIN_HOME, &session), GuardDecision::Render);
    assert_eq!(active(paths::ADMIN_HOME), ["Dashboard"]);
    assert_eq!(active(&paths::admin_submission("123")), ["Submission Review"]);
    assert_eq!(active(paths::ADMIN_PENDING_SUBMISSIONS), ["Pending Submissions"]);
    assert!(active(paths::STUDENT_HOME).is_empty());
}

#[test]
fn unknown_paths_fall_back_to_login() {
    let session = Session::anonymous();
    for path in [paths::ROOT, "/scoreboard", "/reset-password/", "/administrator"] {
        assert_eq!(
            visit(path, &session),
            GuardDecision::Redirect(paths::LOGIN),
            "{path}"
        );
    }
    assert_eq!(
        category_for_path("/admin/"),
        PathClass::Guarded(RouteCategory::AdminOnly)
    );
}
