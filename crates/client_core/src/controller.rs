use shared::{
    domain::{Division, RecordId},
    protocol::DivisionInput,
};
use tracing::{error, info};

use crate::{view_state::ViewState, ClientError, DivisionApi, SubmitError};

#[derive(Debug, Clone, PartialEq)]
pub enum SaveTarget {
    Create,
    Update(RecordId),
}

/// Network work requested by a [`ViewState`] transition.
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerRequest {
    Load,
    Save {
        target: SaveTarget,
        input: DivisionInput,
    },
    Delete {
        id: RecordId,
    },
}

/// Result of running a [`ControllerRequest`]. Mutations carry the follow-up
/// reload, which is only issued once the mutation itself succeeded.
#[derive(Debug, Clone)]
pub enum ControllerOutcome {
    Loaded(Result<Vec<Division>, ClientError>),
    Saved {
        result: Result<Division, ClientError>,
        reload: Option<Result<Vec<Division>, ClientError>>,
    },
    Deleted {
        result: Result<(), ClientError>,
        reload: Option<Result<Vec<Division>, ClientError>>,
    },
}

pub async fn execute<A>(api: &A, request: ControllerRequest) -> ControllerOutcome
where
    A: DivisionApi + ?Sized,
{
    match request {
        ControllerRequest::Load => {
            let result = api.list_all().await;
            match &result {
                Ok(divisions) => info!(count = divisions.len(), "divisions loaded"),
                Err(err) => error!(%err, "error loading divisions"),
            }
            ControllerOutcome::Loaded(result)
        }
        ControllerRequest::Save { target, input } => {
            let result = match &target {
                SaveTarget::Create => api.create(&input).await,
                SaveTarget::Update(id) => api.update(id, &input).await,
            };
            let reload = match &result {
                Ok(saved) => {
                    info!(id = %saved.id, division_id = %saved.division_id, "division saved");
                    Some(api.list_all().await)
                }
                Err(err) => {
                    error!(%err, "error saving division");
                    None
                }
            };
            ControllerOutcome::Saved { result, reload }
        }
        ControllerRequest::Delete { id } => {
            let result = api.delete(&id).await;
            let reload = match &result {
                Ok(()) => {
                    info!(id = %id, "division deleted");
                    Some(api.list_all().await)
                }
                Err(err) => {
                    error!(id = %id, %err, "error deleting division");
                    None
                }
            };
            ControllerOutcome::Deleted { result, reload }
        }
    }
}

/// Owns a [`ViewState`] and runs its requests to completion against `A`, one
/// at a time.
pub struct DivisionController<A> {
    api: A,
    state: ViewState,
}

impl<A: DivisionApi> DivisionController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ViewState::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    pub async fn load(&mut self) {
        let request = self.state.begin_load();
        self.run(request).await;
    }

    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        let request = self.state.submit()?;
        self.run(request).await;
        Ok(())
    }

    pub async fn confirm_delete(&mut self) -> Result<(), SubmitError> {
        let request = self.state.confirm_delete()?;
        self.run(request).await;
        Ok(())
    }

    async fn run(&mut self, request: ControllerRequest) {
        let outcome = execute(&self.api, request).await;
        self.state.apply(outcome);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
