//! Sign-up screen demo
//!
//! A terminal stand-in for the view layer: it opens a session, plays a
//! scripted user, and renders every state snapshot and view action.

use signup::view::{SCREEN_TITLE, SUBMIT_LABEL};
use signup::{FieldId, FormState, SignUpConfig, SignUpIntent, SignUpSession, SignUpViewAction};
use std::time::Duration;
use tokio::sync::{broadcast, oneshot, watch};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "signup=info,composable_mvi_runtime=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== {SCREEN_TITLE} ===\n");

    let config = SignUpConfig::default();
    let latency = config.submit_latency;
    let session = SignUpSession::start(config);

    let (dialog_tx, dialog_rx) = oneshot::channel();
    let presenter = tokio::spawn(present(
        session.subscribe_state(),
        session.subscribe_view_actions(),
        dialog_tx,
    ));

    render_state(&session.current_state());

    println!("\n>>> Pressing \"{SUBMIT_LABEL}\" with an empty form");
    session.handle_intent(SignUpIntent::SubmitClicked)?;
    let_presenter_catch_up().await;

    println!("\n>>> Filling in the form");
    let answers = [
        (FieldId::FullName, "Ada Lovelace"),
        (FieldId::Email, "ada@example.com"),
        (FieldId::Password, "analytical-engine"),
        (FieldId::ConfirmPassword, "analytical-engine"),
    ];
    for (field, value) in answers {
        session.handle_intent(SignUpIntent::UpdateField {
            field,
            value: value.to_string(),
        })?;
    }
    let_presenter_catch_up().await;

    println!("\n>>> Pressing \"{SUBMIT_LABEL}\" again");
    session.handle_intent(SignUpIntent::SubmitClicked)?;

    tokio::time::timeout(latency + Duration::from_secs(5), dialog_rx).await??;

    session.shutdown().await?;
    presenter.abort();

    println!("\n=== Session closed ===");
    Ok(())
}

/// Give the presenter task time to render before the next scripted step
async fn let_presenter_catch_up() {
    tokio::time::sleep(Duration::from_millis(100)).await;
}

/// Render snapshots and view actions until the dialog has been shown
async fn present(
    mut states: watch::Receiver<FormState>,
    mut view_actions: broadcast::Receiver<SignUpViewAction>,
    dialog_shown: oneshot::Sender<()>,
) {
    let mut dialog_shown = Some(dialog_shown);

    loop {
        tokio::select! {
            changed = states.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = states.borrow_and_update().clone();
                render_state(&state);
            }
            action = view_actions.recv() => match action {
                Ok(action) => {
                    render_view_action(&action);
                    if action.dialog().is_some() {
                        if let Some(done) = dialog_shown.take() {
                            let _ = done.send(());
                        }
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Presenter fell behind");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    }
}

fn render_state(state: &FormState) {
    for (id, field) in state.fields() {
        let shown = if id.is_secret() {
            "*".repeat(field.value.chars().count())
        } else {
            field.value.clone()
        };
        let marker = if field.is_error { "  <- required" } else { "" };
        println!("  {:<24}[{shown}]{marker}", id.label());
    }
    if state.is_loading {
        println!("  (loading...)");
    }

    match serde_json::to_string(state) {
        Ok(json) => tracing::debug!(snapshot = %json, "Rendered state"),
        Err(error) => tracing::warn!(%error, "Could not serialize state"),
    }
}

fn render_view_action(action: &SignUpViewAction) {
    match action {
        SignUpViewAction::ShowToast(message) => println!("\n  [toast] {message}"),
        SignUpViewAction::ShowErrorDialog => {
            if let Some(dialog) = action.dialog() {
                println!(
                    "\n  +-- {} --+\n  | {}\n  +-- [{}]",
                    dialog.title, dialog.message, dialog.dismiss_label
                );
            }
        },
    }
}
