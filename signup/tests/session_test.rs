//! End-to-end tests for a running sign-up session
//!
//! Time is paused, so the two-second request completes in virtual time.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use composable_mvi_testing::channels::{drain_events, next_event, wait_for_state};
use composable_mvi_testing::init_test_tracing;
use signup::{
    FieldId, FieldValues, FormAction, SignUpConfig, SignUpIntent, SignUpSession, SignUpViewAction,
};
use std::time::Duration;

const WAIT: Duration = Duration::from_secs(5);

fn edit(field: FieldId, value: &str) -> SignUpIntent {
    SignUpIntent::UpdateField {
        field,
        value: value.to_string(),
    }
}

fn fill_form(session: &SignUpSession) {
    for field in FieldId::ALL {
        session.handle_intent(edit(field, "value")).unwrap();
    }
}

#[tokio::test(start_paused = true)]
async fn empty_submit_flags_fields_without_notifications() {
    init_test_tracing();
    let session = SignUpSession::start(SignUpConfig::default());
    let mut view_actions = session.subscribe_view_actions();

    session.handle_intent(SignUpIntent::SubmitClicked).unwrap();

    let state = session.current_state();
    assert!(state.fields().all(|(_, field)| field.is_error));
    assert!(!state.is_loading);

    assert_eq!(
        next_event(&mut view_actions, Duration::from_secs(3)).await,
        None
    );
}

#[tokio::test(start_paused = true)]
async fn each_intent_is_reduced_before_handle_intent_returns() {
    init_test_tracing();
    let session = SignUpSession::start(SignUpConfig::default());

    session.handle_intent(edit(FieldId::FullName, "Jo")).unwrap();
    assert_eq!(session.current_state().full_name.value, "Jo");

    session.handle_intent(edit(FieldId::FullName, "")).unwrap();
    assert!(session.current_state().full_name.is_error);

    fill_form(&session);
    session.handle_intent(SignUpIntent::SubmitClicked).unwrap();
    assert!(session.current_state().is_loading);

    // Edits stay synchronous while the request is in flight
    session.handle_intent(edit(FieldId::Email, "late@example.com")).unwrap();
    let state = session.current_state();
    assert_eq!(state.email.value, "late@example.com");
    assert!(state.is_loading);
}

#[tokio::test(start_paused = true)]
async fn valid_submit_loads_then_notifies_in_order() {
    init_test_tracing();
    let session = SignUpSession::start(SignUpConfig::default());
    let mut view_actions = session.subscribe_view_actions();
    let mut states = session.subscribe_state();

    fill_form(&session);
    session.handle_intent(SignUpIntent::SubmitClicked).unwrap();

    let started = tokio::time::Instant::now();
    assert!(session.current_state().is_loading);

    let finished = wait_for_state(&mut states, WAIT, |state| !state.is_loading)
        .await
        .expect("request should finish");
    assert!(started.elapsed() >= Duration::from_millis(2000));
    assert!(finished.fields().all(|(_, field)| !field.is_error));

    let toast = next_event(&mut view_actions, WAIT).await;
    assert_eq!(
        toast,
        Some(SignUpViewAction::ShowToast("Api Successful".to_string()))
    );
    assert!(!session.current_state().is_loading);

    let dialog = next_event(&mut view_actions, WAIT).await;
    assert_eq!(dialog, Some(SignUpViewAction::ShowErrorDialog));

    assert!(drain_events(&mut view_actions).is_empty());
}

#[tokio::test(start_paused = true)]
async fn duplicate_submit_runs_one_request() {
    init_test_tracing();
    let session = SignUpSession::start(SignUpConfig::default());
    let mut view_actions = session.subscribe_view_actions();

    fill_form(&session);
    session.handle_intent(SignUpIntent::SubmitClicked).unwrap();
    session.handle_intent(SignUpIntent::SubmitClicked).unwrap();
    assert!(session.current_state().is_loading);

    let mut received = Vec::new();
    while let Some(action) = next_event(&mut view_actions, WAIT).await {
        received.push(action);
    }

    assert_eq!(
        received,
        vec![
            SignUpViewAction::ShowToast("Api Successful".to_string()),
            SignUpViewAction::ShowErrorDialog,
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn edits_apply_while_request_is_in_flight() {
    init_test_tracing();
    let session = SignUpSession::start(SignUpConfig::default());

    fill_form(&session);
    session.handle_intent(SignUpIntent::SubmitClicked).unwrap();
    session.handle_intent(edit(FieldId::Email, "")).unwrap();

    let state = session.current_state();
    assert!(state.is_loading);
    assert!(state.email.is_error);
    assert!(state.email.value.is_empty());

    // The request still completes with the edited form
    let mut states = session.subscribe_state();
    let finished = wait_for_state(&mut states, WAIT, |state| !state.is_loading).await;
    assert!(finished.is_some_and(|state| state.email.is_error));
}

#[tokio::test(start_paused = true)]
async fn closing_cancels_pending_notifications() {
    init_test_tracing();
    let session = SignUpSession::start(SignUpConfig::default());
    let mut view_actions = session.subscribe_view_actions();

    fill_form(&session);
    session.handle_intent(SignUpIntent::SubmitClicked).unwrap();

    tokio::time::sleep(Duration::from_millis(500)).await;
    session.close();

    assert_eq!(next_event(&mut view_actions, WAIT).await, None);
    assert!(!session.is_open());
}

#[tokio::test(start_paused = true)]
async fn dropping_the_session_cancels_pending_notifications() {
    init_test_tracing();
    let session = SignUpSession::start(SignUpConfig::default());
    let mut view_actions = session.subscribe_view_actions();

    fill_form(&session);
    session.handle_intent(SignUpIntent::SubmitClicked).unwrap();
    drop(session);

    assert_eq!(next_event(&mut view_actions, WAIT).await, None);
}

#[tokio::test(start_paused = true)]
async fn late_state_subscriber_sees_latest_snapshot() {
    init_test_tracing();
    let session = SignUpSession::start(SignUpConfig::default());

    session.handle_intent(edit(FieldId::FullName, "Jo")).unwrap();
    session.handle_intent(edit(FieldId::FullName, "Joe")).unwrap();

    let late = session.subscribe_state();
    assert_eq!(late.borrow().full_name.value, "Joe");
    assert_eq!(*late.borrow(), session.current_state());
}

#[tokio::test(start_paused = true)]
async fn late_view_action_subscriber_misses_earlier_emissions() {
    init_test_tracing();
    let session = SignUpSession::start(SignUpConfig::default());
    let mut early = session.subscribe_view_actions();

    fill_form(&session);
    session.handle_intent(SignUpIntent::SubmitClicked).unwrap();

    assert!(next_event(&mut early, WAIT).await.is_some());
    assert!(next_event(&mut early, WAIT).await.is_some());

    let mut late = session.subscribe_view_actions();
    assert!(drain_events(&mut late).is_empty());
}

#[tokio::test(start_paused = true)]
async fn prefilled_form_can_be_submitted() {
    init_test_tracing();
    let session = SignUpSession::start(SignUpConfig::default());
    let mut view_actions = session.subscribe_view_actions();

    session
        .dispatch(FormAction::ReplaceFields(FieldValues {
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            password: "secret".into(),
            confirm_password: "secret".into(),
        }))
        .unwrap();
    session.handle_intent(SignUpIntent::SubmitClicked).unwrap();

    let state = session.current_state();
    assert_eq!(state.full_name.value, "Ada Lovelace");
    assert!(state.is_loading);

    assert!(matches!(
        next_event(&mut view_actions, WAIT).await,
        Some(SignUpViewAction::ShowToast(_))
    ));
}

#[tokio::test(start_paused = true)]
async fn custom_latency_and_message_are_used() {
    init_test_tracing();
    let config = SignUpConfig::default()
        .with_submit_latency(Duration::from_millis(100))
        .with_success_message("Welcome aboard");
    let session = SignUpSession::start(config);
    let mut view_actions = session.subscribe_view_actions();

    fill_form(&session);
    session.handle_intent(SignUpIntent::SubmitClicked).unwrap();

    let toast = next_event(&mut view_actions, Duration::from_millis(500)).await;
    assert_eq!(
        toast,
        Some(SignUpViewAction::ShowToast("Welcome aboard".to_string()))
    );
}

#[tokio::test(start_paused = true)]
async fn shutdown_waits_for_in_flight_request() {
    init_test_tracing();
    let session = SignUpSession::start(SignUpConfig::default());
    let mut view_actions = session.subscribe_view_actions();

    fill_form(&session);
    session.handle_intent(SignUpIntent::SubmitClicked).unwrap();

    session.shutdown().await.unwrap();

    assert_eq!(
        drain_events(&mut view_actions),
        vec![
            SignUpViewAction::ShowToast("Api Successful".to_string()),
            SignUpViewAction::ShowErrorDialog,
        ]
    );
}
