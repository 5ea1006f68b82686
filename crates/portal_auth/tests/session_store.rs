#![allow(clippy::unwrap_used, clippy::expect_used)]

use anyhow::Result;
use portal_auth::{
    ApiError, Credentials, ErrorKind, KeyValueStore, RegisterRequest, Role, Session, SessionStore,
    error::SERVER_MESSAGE,
    storage::{ADMIN_PROFILE_KEY, ADMIN_TOKEN_KEY, STUDENT_PROFILE_KEY, STUDENT_TOKEN_KEY},
};
use std::{cell::RefCell, rc::Rc};
use test_support::{Call, FakeAuthApi, MemoryStore, auth_response, profile};

type Store = SessionStore<FakeAuthApi, MemoryStore>;

fn store(api: &FakeAuthApi, storage: &MemoryStore) -> Store {
    SessionStore::new(api.clone(), storage.clone())
}

fn credentials(email: &str) -> Credentials {
    Credentials {
        email: email.to_string(),
        password: "Abcdef1!".to_string(),
    }
}

fn seed(storage: &MemoryStore, role: Role, token: &str) {
    portal_auth::storage::persist_credentials(storage, role, token, &profile("Cached User"))
        .unwrap();
}

#[tokio::test]
async fn admin_login_survives_a_reload() -> Result<()> {
    let api = FakeAuthApi::new();
    let storage = MemoryStore::new();
    api.accept_login(Role::Admin, auth_response("Root Admin", "admin-token"));

    let first = store(&api, &storage);
    first.restore().await;
    let signed_in = first
        .login_as_admin(&credentials("root@paruluniversity.ac.in"))
        .await?;
    assert_eq!(signed_in.display_name(), "Root Admin");
    assert_eq!(storage.get(ADMIN_TOKEN_KEY).as_deref(), Some("admin-token"));
    assert!(storage.contains(ADMIN_PROFILE_KEY));

    let reloaded = store(&api, &storage);
    assert!(reloaded.snapshot().is_resolving());
    reloaded.restore().await;

    let session = reloaded.snapshot();
    assert!(session.is_authenticated());
    assert!(!session.is_resolving());
    assert_eq!(session.role(), Some(Role::Admin));
    assert_eq!(
        session.principal().map(portal_auth::Profile::display_name).as_deref(),
        Some("Root Admin")
    );
    Ok(())
}

#[tokio::test]
async fn restore_without_token_makes_no_calls() {
    let api = FakeAuthApi::new();
    let storage = MemoryStore::new();
    let store = store(&api, &storage);

    store.restore().await;

    assert_eq!(store.snapshot(), Session::anonymous());
    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn blank_token_counts_as_absent() {
    let api = FakeAuthApi::new();
    let storage = MemoryStore::with_entries([(STUDENT_TOKEN_KEY, "   ")]);
    let store = store(&api, &storage);

    store.restore().await;

    assert!(!store.snapshot().is_authenticated());
    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn rejected_token_clears_every_key() {
    let api = FakeAuthApi::new();
    let storage = MemoryStore::new();
    seed(&storage, Role::Admin, "stale-admin");
    seed(&storage, Role::Student, "stale-student");
    let store = store(&api, &storage);

    store.restore().await;

    let session = store.snapshot();
    assert!(!session.is_authenticated());
    assert!(!session.is_resolving());
    assert!(storage.keys().is_empty(), "left behind: {:?}", storage.keys());
    assert_eq!(
        api.calls(),
        vec![Call::FetchProfile {
            role: Role::Admin,
            token: "stale-admin".to_string(),
        }]
    );
}

#[tokio::test]
async fn transport_failure_during_restore_reads_as_signed_out() {
    let api = FakeAuthApi::new();
    let storage = MemoryStore::new();
    seed(&storage, Role::Student, "student-token");
    api.issue_token(Role::Student, "student-token", profile("Jane Doe"));
    api.fail_profile(ApiError::Timeout);
    let store = store(&api, &storage);

    store.restore().await;

    assert_eq!(store.snapshot(), Session::anonymous());
    assert!(!storage.contains(STUDENT_TOKEN_KEY));
    assert!(!storage.contains(STUDENT_PROFILE_KEY));
}

#[tokio::test]
async fn admin_token_takes_precedence_on_restore() {
    let api = FakeAuthApi::new();
    let storage = MemoryStore::new();
    seed(&storage, Role::Admin, "admin-token");
    seed(&storage, Role::Student, "student-token");
    api.issue_token(Role::Admin, "admin-token", profile("Root Admin"));
    api.issue_token(Role::Student, "student-token", profile("Jane Doe"));
    let store = store(&api, &storage);

    store.restore().await;

    assert_eq!(store.snapshot().role(), Some(Role::Admin));
    assert_eq!(store.token().as_deref(), Some("admin-token"));
}

#[tokio::test]
async fn restore_refreshes_cached_profile() {
    let api = FakeAuthApi::new();
    let storage = MemoryStore::new();
    seed(&storage, Role::Student, "student-token");
    api.issue_token(Role::Student, "student-token", profile("Jane Doe"));
    let store = store(&api, &storage);
    assert_eq!(
        store.cached_profile().map(|p| p.display_name()).as_deref(),
        Some("Cached User")
    );

    store.restore().await;

    assert_eq!(
        store.cached_profile().map(|p| p.display_name()).as_deref(),
        Some("Jane Doe")
    );
}

#[tokio::test]
async fn failed_login_mutates_nothing() {
    let api = FakeAuthApi::new();
    let storage = MemoryStore::new();
    seed(&storage, Role::Student, "student-token");
    api.issue_token(Role::Student, "student-token", profile("Jane Doe"));
    api.reject_login(
        Role::Admin,
        ApiError::from_response(401, r#"{"message":"Invalid email or password"}"#),
    );
    let store = store(&api, &storage);
    store.restore().await;
    let before_session = store.snapshot();
    let before_storage = storage.snapshot();

    let err = store
        .login_as_admin(&credentials("root@paruluniversity.ac.in"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Authorization);
    assert_eq!(err.message, "Invalid email or password");
    assert_eq!(store.snapshot(), before_session);
    assert_eq!(storage.snapshot(), before_storage);
}

#[tokio::test]
async fn login_errors_fall_back_to_generic_messages() {
    let api = FakeAuthApi::new();
    let storage = MemoryStore::new();
    let store = store(&api, &storage);
    store.restore().await;

    api.reject_login(Role::Student, ApiError::from_response(400, ""));
    let err = store
        .login_as_student(&credentials("jdoe@paruluniversity.ac.in"))
        .await
        .unwrap_err();
    assert_eq!(err.message, "Login failed");

    api.reject_login(Role::Student, ApiError::from_response(502, "<html></html>"));
    let err = store
        .login_as_student(&credentials("jdoe@paruluniversity.ac.in"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Server);
    assert_eq!(err.message, SERVER_MESSAGE);
}

#[tokio::test]
async fn login_drops_the_other_roles_credentials() -> Result<()> {
    let api = FakeAuthApi::new();
    let storage = MemoryStore::new();
    seed(&storage, Role::Admin, "old-admin");
    api.accept_login(Role::Student, auth_response("Jane Doe", "student-token"));
    let store = store(&api, &storage);

    store
        .login_as_student(&credentials("jane.doe@paruluniversity.ac.in"))
        .await?;

    assert!(!storage.contains(ADMIN_TOKEN_KEY));
    assert!(!storage.contains(ADMIN_PROFILE_KEY));
    assert_eq!(
        storage.get(STUDENT_TOKEN_KEY).as_deref(),
        Some("student-token")
    );
    assert_eq!(store.snapshot().role(), Some(Role::Student));
    Ok(())
}

#[tokio::test]
async fn register_always_signs_in_as_student() -> Result<()> {
    let api = FakeAuthApi::new();
    let storage = MemoryStore::new();
    api.accept_register(auth_response("New Student", "fresh-token"));
    let store = store(&api, &storage);
    store.restore().await;

    let request = RegisterRequest {
        full_name: "New Student".to_string(),
        email: "new.student@paruluniversity.ac.in".to_string(),
        ..RegisterRequest::default()
    };
    store.register(&request).await?;

    assert_eq!(store.snapshot().role(), Some(Role::Student));
    assert_eq!(store.token().as_deref(), Some("fresh-token"));
    Ok(())
}

#[tokio::test]
async fn register_failure_uses_registration_fallback() {
    let api = FakeAuthApi::new();
    let storage = MemoryStore::new();
    api.reject_register(ApiError::Parse("missing token".to_string()));
    let store = store(&api, &storage);
    store.restore().await;

    let err = store
        .register(&RegisterRequest::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Unexpected);
    assert_eq!(err.message, "Registration failed");
    assert!(!store.snapshot().is_authenticated());
    assert_eq!(storage.writes(), 0);
}

#[tokio::test]
async fn logout_clears_locally_even_when_the_server_fails() -> Result<()> {
    let api = FakeAuthApi::new();
    let storage = MemoryStore::new();
    api.accept_login(Role::Admin, auth_response("Root Admin", "admin-token"));
    api.fail_logout(ApiError::Network("connection reset".to_string()));
    let store = store(&api, &storage);
    store.restore().await;
    store
        .login_as_admin(&credentials("root@paruluniversity.ac.in"))
        .await?;

    store.logout().await;

    let session = store.snapshot();
    assert!(!session.is_authenticated());
    assert_eq!(session.role(), None);
    assert!(!storage.contains(ADMIN_TOKEN_KEY));
    assert!(!storage.contains(ADMIN_PROFILE_KEY));
    assert!(api.calls().contains(&Call::Logout {
        role: Role::Admin,
        token: Some("admin-token".to_string()),
    }));
    Ok(())
}

#[tokio::test]
async fn logout_when_signed_out_skips_the_server() {
    let api = FakeAuthApi::new();
    let storage = MemoryStore::new();
    let store = store(&api, &storage);
    store.restore().await;

    store.logout().await;

    assert_eq!(store.snapshot(), Session::anonymous());
    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn storage_write_failure_still_signs_in_for_the_tab() -> Result<()> {
    let api = FakeAuthApi::new();
    let storage = MemoryStore::new();
    storage.set_read_only(true);
    api.accept_login(Role::Student, auth_response("Jane Doe", "student-token"));
    let store = store(&api, &storage);
    store.restore().await;

    store
        .login_as_student(&credentials("jane.doe@paruluniversity.ac.in"))
        .await?;

    assert_eq!(store.snapshot().role(), Some(Role::Student));
    assert_eq!(store.token().as_deref(), Some("student-token"));
    assert!(storage.keys().is_empty());

    store.logout().await;
    assert!(api.calls().contains(&Call::Logout {
        role: Role::Student,
        token: Some("student-token".to_string()),
    }));
    assert_eq!(store.token(), None);
    Ok(())
}

#[tokio::test]
async fn subscribers_observe_every_transition() -> Result<()> {
    let api = FakeAuthApi::new();
    let storage = MemoryStore::new();
    api.accept_login(Role::Student, auth_response("Jane Doe", "student-token"));
    let store = store(&api, &storage);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |session| {
        sink.borrow_mut()
            .push((session.is_resolving(), session.role()));
    });

    store.restore().await;
    store
        .login_as_student(&credentials("jane.doe@paruluniversity.ac.in"))
        .await?;
    store.logout().await;

    assert_eq!(
        *seen.borrow(),
        vec![(false, None), (false, Some(Role::Student)), (false, None)]
    );
    Ok(())
}

#[tokio::test]
async fn replace_principal_updates_memory_and_cache() -> Result<()> {
    let api = FakeAuthApi::new();
    let storage = MemoryStore::new();
    api.accept_login(Role::Student, auth_response("Jane Doe", "student-token"));
    let store = store(&api, &storage);
    store.restore().await;
    store
        .login_as_student(&credentials("jane.doe@paruluniversity.ac.in"))
        .await?;

    store.replace_principal(profile("Jane Smith"));

    assert_eq!(
        store.snapshot().principal().map(|p| p.display_name()).as_deref(),
        Some("Jane Smith")
    );
    assert_eq!(
        store.cached_profile().map(|p| p.display_name()).as_deref(),
        Some("Jane Smith")
    );
    Ok(())
}

#[tokio::test]
async fn stale_restore_does_not_overwrite_a_newer_login() -> Result<()> {
    let api = FakeAuthApi::new();
    let storage = MemoryStore::new();
    seed(&storage, Role::Admin, "admin-token");
    api.issue_token(Role::Admin, "admin-token", profile("Root Admin"));
    api.accept_login(Role::Student, auth_response("Jane Doe", "student-token"));
    let gate = api.hold_profile();
    let store = store(&api, &storage);

    let (_, login) = tokio::join!(store.restore(), async {
        let result = store
            .login_as_student(&credentials("jane.doe@paruluniversity.ac.in"))
            .await;
        gate.open();
        result
    });
    login?;

    let session = store.snapshot();
    assert!(!session.is_resolving());
    assert_eq!(session.role(), Some(Role::Student));
    assert_eq!(store.token().as_deref(), Some("student-token"));
    assert!(!storage.contains(ADMIN_TOKEN_KEY));
    Ok(())
}

#[tokio::test]
async fn stale_failed_restore_keeps_the_newer_credentials() -> Result<()> {
    let api = FakeAuthApi::new();
    let storage = MemoryStore::new();
    seed(&storage, Role::Admin, "admin-token");
    api.accept_login(Role::Student, auth_response("Jane Doe", "student-token"));
    let gate = api.hold_profile();
    let store = store(&api, &storage);

    let (_, login) = tokio::join!(store.restore(), async {
        let result = store
            .login_as_student(&credentials("jane.doe@paruluniversity.ac.in"))
            .await;
        api.fail_profile(ApiError::from_response(
            401,
            r#"{"message":"Invalid or expired token"}"#,
        ));
        gate.open();
        result
    });
    login?;

    let session = store.snapshot();
    assert!(!session.is_resolving());
    assert_eq!(session.role(), Some(Role::Student));
    assert_eq!(store.token().as_deref(), Some("student-token"));
    assert_eq!(storage.get(STUDENT_TOKEN_KEY).as_deref(), Some("student-token"));
    assert!(storage.contains(STUDENT_PROFILE_KEY));
    Ok(())
}

#[tokio::test]
async fn stale_restore_does_not_undo_a_logout() -> Result<()> {
    let api = FakeAuthApi::new();
    let storage = MemoryStore::new();
    seed(&storage, Role::Student, "old-token");
    api.issue_token(Role::Student, "old-token", profile("Jane Doe"));
    api.accept_login(Role::Student, auth_response("Jane Doe", "student-token"));
    let gate = api.hold_profile();
    let store = store(&api, &storage);

    let (_, login) = tokio::join!(store.restore(), async {
        let result = store
            .login_as_student(&credentials("jane.doe@paruluniversity.ac.in"))
            .await;
        store.logout().await;
        gate.open();
        result
    });
    login?;

    assert_eq!(store.snapshot(), Session::anonymous());
    assert_eq!(store.token(), None);
    assert!(!storage.contains(STUDENT_TOKEN_KEY));
    assert!(!storage.contains(STUDENT_PROFILE_KEY));
    Ok(())
}
