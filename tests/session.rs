//! Session view model against the in-memory server.

mod common;

use std::cell::Cell;
use std::rc::Rc;

use common::{harness, signed_in, EMAIL, PASSWORD, TOKEN};
use todo_web::error::ClientError;
use todo_web::models::{Credentials, SignupRequest};
use todo_web::session::{SessionState, SessionStore};
use todo_web::todo_list::ListState;

fn credentials(email: &str, password: &str) -> Credentials {
    Credentials {
        email: email.into(),
        password: password.into(),
    }
}

#[tokio::test]
async fn test_activate_without_token_makes_no_request() {
    let h = harness(None);

    h.vm.activate().await.unwrap();

    assert_eq!(h.vm.state(), SessionState::Unauthenticated);
    assert!(h.server.calls.borrow().is_empty());
}

#[tokio::test]
async fn test_activate_with_token_loads_profile_then_list() {
    let h = harness(Some(TOKEN));
    h.server.seed("one", "1");

    h.vm.activate().await.unwrap();

    assert_eq!(*h.server.calls.borrow(), ["fetch_profile", "list_todos"]);
    let state = h.vm.state();
    assert_eq!(state.profile().map(|p| p.full_name()).as_deref(), Some("Ada Lovelace"));
    assert_eq!(h.vm.todos().todos().len(), 1);
}

#[tokio::test]
async fn test_login_stores_token_then_fetches_profile() {
    let h = harness(None);
    h.vm.activate().await.unwrap();

    h.vm.login(&credentials(EMAIL, PASSWORD)).await.unwrap();

    assert_eq!(h.store.get().as_deref(), Some(TOKEN));
    assert_eq!(*h.server.calls.borrow(), ["login", "fetch_profile", "list_todos"]);
    assert!(matches!(h.vm.state(), SessionState::Authenticated(_)));
    assert!(!h.vm.is_submitting());
}

#[tokio::test]
async fn test_login_passes_through_authenticating() {
    let h = harness(None);
    let seen = Rc::new(Cell::new(false));
    let handle = h.vm.handle().clone();
    let flag = seen.clone();
    h.vm.handle().subscribe(move || {
        if handle.state() == SessionState::Authenticating {
            flag.set(true);
        }
    });

    h.vm.login(&credentials(EMAIL, PASSWORD)).await.unwrap();

    assert!(seen.get());
}

#[tokio::test]
async fn test_login_rejected_keeps_form_state() {
    let h = harness(None);
    h.vm.activate().await.unwrap();

    let err = h.vm.login(&credentials(EMAIL, "wrong")).await.unwrap_err();

    assert_eq!(err.to_string(), "Invalid Credentials");
    assert_eq!(h.vm.state(), SessionState::Unauthenticated);
    assert!(h.store.get().is_none());
    assert!(!h.vm.is_submitting());
    assert_eq!(h.server.count("fetch_profile"), 0);
}

#[tokio::test]
async fn test_login_with_empty_fields_is_local() {
    let h = harness(None);

    let err = h.vm.login(&credentials("", "")).await.unwrap_err();

    match err {
        ClientError::Validation(errors) => assert_eq!(errors.len(), 2),
        other => panic!("expected validation error, got {:?}", other),
    }
    assert!(h.server.calls.borrow().is_empty());
}

#[tokio::test]
async fn test_double_login_submit_is_refused() {
    let h = harness(None);
    let creds = credentials(EMAIL, PASSWORD);

    let (first, second) = tokio::join!(h.vm.login(&creds), h.vm.login(&creds));

    assert!(first.is_ok());
    assert_eq!(second, Err(ClientError::Busy));
    assert_eq!(h.server.count("login"), 1);
}

#[tokio::test]
async fn test_signup_signs_in_as_new_user() {
    let h = harness(None);
    let profile = SignupRequest {
        first_name: "Grace".into(),
        last_name: "Hopper".into(),
        email: "grace@x.com".into(),
        password: "cobol".into(),
    };

    h.vm.signup(&profile).await.unwrap();

    assert_eq!(h.store.get().as_deref(), Some("T-grace@x.com"));
    let state = h.vm.state();
    assert_eq!(state.profile().map(|p| p.first_name.as_str()), Some("Grace"));
}

#[tokio::test]
async fn test_signup_duplicate_surfaces_server_message() {
    let h = harness(None);
    let profile = SignupRequest {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: EMAIL.into(),
        password: "x".into(),
    };

    let err = h.vm.signup(&profile).await.unwrap_err();

    assert_eq!(err.to_string(), "User already exists");
    assert!(h.store.get().is_none());
}

#[tokio::test]
async fn test_rejected_token_routes_to_login() {
    let h = harness(Some("forged"));

    let err = h.vm.activate().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(h.vm.state(), SessionState::Unauthenticated);
    assert!(h.store.get().is_none());
    assert_eq!(h.server.count("list_todos"), 0);
}

#[tokio::test]
async fn test_profile_network_failure_routes_to_login() {
    let h = harness(Some(TOKEN));
    h.server.fail_next(
        "fetch_profile",
        todo_web::error::NetworkFailure::Timeout.into(),
    );

    let err = h.vm.activate().await.unwrap_err();

    assert!(matches!(err, ClientError::Network(_)));
    assert_eq!(h.vm.state(), SessionState::Unauthenticated);
}

#[tokio::test]
async fn test_logout_is_local_and_clears_everything() {
    let h = signed_in().await;
    h.server.seed("one", "1");
    h.vm.todos().refresh().await.unwrap();
    h.server.clear_calls();

    h.vm.logout();

    assert_eq!(h.vm.state(), SessionState::Unauthenticated);
    assert!(h.store.get().is_none());
    assert_eq!(h.vm.todos().state(), ListState::Idle);
    assert!(h.server.calls.borrow().is_empty());
}

#[tokio::test]
async fn test_response_after_logout_is_dropped() {
    let h = signed_in().await;
    h.server.seed("one", "1");
    let todos = h.vm.todos();

    let logout = async {
        tokio::task::yield_now().await;
        h.vm.logout();
    };
    let (refreshed, ()) = tokio::join!(todos.refresh(), logout);

    assert!(refreshed.is_ok());
    assert_eq!(todos.state(), ListState::Idle);
    assert_eq!(h.vm.state(), SessionState::Unauthenticated);
}

#[tokio::test]
async fn test_auth_surface_guard() {
    let h = harness(None);
    assert!(!h.vm.enter_auth_surface().await.unwrap());
    assert!(h.server.calls.borrow().is_empty());

    let h = harness(Some(TOKEN));
    assert!(h.vm.enter_auth_surface().await.unwrap());
    assert!(matches!(h.vm.state(), SessionState::Authenticated(_)));
}

#[tokio::test]
async fn test_listeners_hear_changes() {
    let h = harness(None);
    let count = Rc::new(Cell::new(0));
    let counter = count.clone();
    h.vm.handle().subscribe(move || counter.set(counter.get() + 1));

    h.vm.activate().await.unwrap();

    assert!(count.get() > 0);
}

#[tokio::test]
async fn test_logout_during_activation_is_not_an_error() {
    let h = harness(Some(TOKEN));
    h.server.seed("one", "1");

    let logout = async {
        // Lands while the list request is in flight
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
        h.vm.logout();
    };
    let (activated, ()) = tokio::join!(h.vm.activate(), logout);

    assert_eq!(activated, Ok(()));
    assert_eq!(h.vm.state(), SessionState::Unauthenticated);
    assert_eq!(h.vm.todos().state(), ListState::Idle);
}
