//! Folds backend events into the screen state.

use client_core::ViewState;

use crate::controller::events::UiEvent;

pub fn apply_ui_event(state: &mut ViewState, status: &mut String, event: UiEvent) {
    match event {
        UiEvent::Info(message) => {
            *status = message;
        }
        UiEvent::Error(err) => {
            tracing::warn!(
                category = ?err.category(),
                context = ?err.context(),
                message = err.message(),
                "ui error"
            );
            state.fail_dispatch(err.banner_text());
        }
        UiEvent::Outcome(outcome) => {
            state.apply(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::events::{UiError, UiErrorContext};
    use client_core::{ClientError, ControllerOutcome, FormDialog, LoadState};
    use shared::domain::{Division, DivisionStatus, RecordId};

    fn division(id: &str, division_id: &str) -> Division {
        Division {
            id: RecordId::new(id),
            division_id: division_id.into(),
            name: format!("Division {id}"),
            description: None,
            head: None,
            parent_organization: None,
            budget: None,
            status: DivisionStatus::Active,
            created_at: None,
        }
    }

    #[test]
    fn info_updates_status_line_only() {
        let mut state = ViewState::new();
        let mut status = String::new();

        apply_ui_event(&mut state, &mut status, UiEvent::Info("Backend worker ready".into()));

        assert_eq!(status, "Backend worker ready");
        assert!(state.error().is_none());
    }

    #[test]
    fn startup_error_clears_loading_and_shows_banner() {
        let mut state = ViewState::new();
        let mut status = String::new();
        let _ = state.begin_load();

        apply_ui_event(
            &mut state,
            &mut status,
            UiEvent::Error(UiError::from_message(
                UiErrorContext::BackendStartup,
                "failed to build runtime",
            )),
        );

        assert_eq!(state.load_state(), LoadState::Errored);
        assert_eq!(state.error(), Some("Startup: failed to build runtime"));
    }

    #[test]
    fn outcomes_flow_into_view_state() {
        let mut state = ViewState::new();
        let mut status = String::new();
        let _ = state.begin_load();

        apply_ui_event(
            &mut state,
            &mut status,
            UiEvent::Outcome(ControllerOutcome::Loaded(Ok(vec![
                division("1", "DIV-001"),
                division("2", "DIV-002"),
            ]))),
        );
        assert_eq!(state.divisions().len(), 2);

        state.open_create();
        state.draft_mut().name = "Ops".into();
        state.submit().expect("submit");
        apply_ui_event(
            &mut state,
            &mut status,
            UiEvent::Outcome(ControllerOutcome::Saved {
                result: Err(ClientError::Service {
                    status: 400,
                    body: r#"{"error":"Division ID already exists"}"#.into(),
                }),
                reload: None,
            }),
        );

        assert_eq!(state.form(), &FormDialog::Create);
        assert_eq!(state.error(), Some("Division ID already exists"));
        assert!(!state.is_busy());
    }
}
