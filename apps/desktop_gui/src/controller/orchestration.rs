//! Command orchestration helpers from UI actions to backend command queue.

use client_core::{ControllerRequest, ViewState};
use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub const QUEUE_FULL_MESSAGE: &str = "UI command queue is full; please retry";
pub const WORKER_DISCONNECTED_MESSAGE: &str =
    "Backend command processor disconnected; restart the application";

/// Queues `request` for the worker. When the queue refuses it, the markers
/// the originating transition set are unwound so the screen never waits on a
/// reply that cannot arrive.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    request: ControllerRequest,
    state: &mut ViewState,
) {
    let cmd = BackendCommand::from(request);
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui command queue full");
            state.fail_dispatch(QUEUE_FULL_MESSAGE);
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "backend command processor disconnected");
            state.fail_dispatch(WORKER_DISCONNECTED_MESSAGE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_core::LoadState;
    use crossbeam_channel::bounded;
    use shared::domain::RecordId;

    #[test]
    fn queued_load_keeps_loading_marker() {
        let (cmd_tx, cmd_rx) = bounded(1);
        let mut state = ViewState::new();

        let request = state.begin_load();
        dispatch_backend_command(&cmd_tx, request, &mut state);

        assert!(state.is_loading());
        assert_eq!(cmd_rx.try_recv().ok(), Some(BackendCommand::LoadDivisions));
    }

    #[test]
    fn full_queue_unwinds_loading() {
        let (cmd_tx, _cmd_rx) = bounded(1);
        cmd_tx
            .try_send(BackendCommand::LoadDivisions)
            .expect("fill queue");
        let mut state = ViewState::new();

        let request = state.begin_load();
        dispatch_backend_command(&cmd_tx, request, &mut state);

        assert_eq!(state.load_state(), LoadState::Errored);
        assert_eq!(state.error(), Some(QUEUE_FULL_MESSAGE));
    }

    #[test]
    fn disconnected_worker_releases_pending_delete() {
        let (cmd_tx, cmd_rx) = bounded(1);
        drop(cmd_rx);
        let mut state = ViewState::new();
        state.request_delete(RecordId::new("1"));

        let request = state.confirm_delete().expect("confirm");
        dispatch_backend_command(&cmd_tx, request, &mut state);

        assert!(!state.is_busy());
        assert!(!state.confirm().is_open());
        assert_eq!(state.error(), Some(WORKER_DISCONNECTED_MESSAGE));
    }
}
