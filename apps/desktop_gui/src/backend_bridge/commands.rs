//! Backend commands queued from UI to backend worker.

use client_core::{ControllerRequest, SaveTarget};
use shared::{domain::RecordId, protocol::DivisionInput};

#[derive(Debug, Clone, PartialEq)]
pub enum BackendCommand {
    LoadDivisions,
    SaveDivision {
        target: SaveTarget,
        input: DivisionInput,
    },
    DeleteDivision {
        id: RecordId,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::LoadDivisions => "load_divisions",
            BackendCommand::SaveDivision {
                target: SaveTarget::Create,
                ..
            } => "create_division",
            BackendCommand::SaveDivision { .. } => "update_division",
            BackendCommand::DeleteDivision { .. } => "delete_division",
        }
    }
}

impl From<ControllerRequest> for BackendCommand {
    fn from(request: ControllerRequest) -> Self {
        match request {
            ControllerRequest::Load => BackendCommand::LoadDivisions,
            ControllerRequest::Save { target, input } => {
                BackendCommand::SaveDivision { target, input }
            }
            ControllerRequest::Delete { id } => BackendCommand::DeleteDivision { id },
        }
    }
}

impl From<BackendCommand> for ControllerRequest {
    fn from(cmd: BackendCommand) -> Self {
        match cmd {
            BackendCommand::LoadDivisions => ControllerRequest::Load,
            BackendCommand::SaveDivision { target, input } => {
                ControllerRequest::Save { target, input }
            }
            BackendCommand::DeleteDivision { id } => ControllerRequest::Delete { id },
        }
    }
}
