//! In-memory state behind the division management screen.
//!
//! `ViewState` owns the loaded collection, filters, the form draft and both
//! dialogs. User actions are plain methods; anything that needs the network
//! returns a [`ControllerRequest`] and the caller folds the matching
//! [`ControllerOutcome`] back in with [`ViewState::apply`].

use std::collections::HashSet;

use shared::{
    domain::{Division, DivisionStatus, RecordId, StatusFilter},
    protocol::DivisionInput,
};
use thiserror::Error;
use tracing::debug;

use crate::{
    controller::{ControllerOutcome, ControllerRequest, SaveTarget},
    ClientError,
};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Division ID and Name are required fields";
pub const INVALID_BUDGET_MESSAGE: &str = "Budget must be a non-negative number";
pub const LOAD_FAILED_FALLBACK: &str = "Failed to load divisions";
pub const SAVE_FAILED_FALLBACK: &str = "Failed to save division";
pub const DELETE_FAILED_FALLBACK: &str = "Failed to delete division";

pub const NO_MATCHES_MESSAGE: &str = "No divisions match your search criteria.";
pub const NO_RECORDS_MESSAGE: &str =
    "No divisions found. Create your first division to get started.";

const DIVISION_ID_PREFIX: &str = "DIV-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormDialog {
    #[default]
    Closed,
    Create,
    Edit(RecordId),
}

impl FormDialog {
    pub fn is_open(&self) -> bool {
        !matches!(self, FormDialog::Closed)
    }

    pub fn editing(&self) -> Option<&RecordId> {
        match self {
            FormDialog::Edit(id) => Some(id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfirmDialog {
    #[default]
    Closed,
    Open(RecordId),
}

impl ConfirmDialog {
    pub fn is_open(&self) -> bool {
        matches!(self, ConfirmDialog::Open(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingOperation {
    Save,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("{0}")]
    Validation(String),
    #[error("a save or delete request is still in flight")]
    InFlight,
    #[error("no dialog is open")]
    NoDialog,
}

/// Editable text form of a division.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DivisionDraft {
    pub division_id: String,
    pub name: String,
    pub description: String,
    pub head: String,
    pub parent_organization: String,
    pub budget: String,
    pub status: DivisionStatus,
}

impl DivisionDraft {
    pub fn with_division_id(division_id: impl Into<String>) -> Self {
        Self {
            division_id: division_id.into(),
            ..Self::default()
        }
    }

    pub fn from_division(division: &Division) -> Self {
        Self {
            division_id: division.division_id.clone(),
            name: division.name.clone(),
            description: division.description.clone().unwrap_or_default(),
            head: division.head.clone().unwrap_or_default(),
            parent_organization: division.parent_organization.clone().unwrap_or_default(),
            budget: division.budget.map(|b| b.to_string()).unwrap_or_default(),
            status: division.status,
        }
    }

    /// Validates required fields and coerces the budget.
    pub fn to_input(&self) -> Result<DivisionInput, SubmitError> {
        let division_id = self.division_id.trim();
        let name = self.name.trim();
        if division_id.is_empty() || name.is_empty() {
            return Err(SubmitError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        }

        Ok(DivisionInput {
            division_id: division_id.to_string(),
            name: name.to_string(),
            description: self.description.clone(),
            head: self.head.clone(),
            parent_organization: self.parent_organization.clone(),
            budget: parse_budget(&self.budget)?,
            status: self.status,
        })
    }
}

fn parse_budget(raw: &str) -> Result<Option<f64>, SubmitError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(Some(value)),
        _ => Err(SubmitError::Validation(INVALID_BUDGET_MESSAGE.to_string())),
    }
}

/// Records whose status passes `status_filter` and whose name, description or
/// head contains `search_term` (case-insensitive). Recomputed per call.
pub fn filter_divisions<'a>(
    divisions: &'a [Division],
    search_term: &str,
    status_filter: StatusFilter,
) -> Vec<&'a Division> {
    let needle = search_term.to_lowercase();
    divisions
        .iter()
        .filter(|division| {
            status_filter.matches(division.status) && division.matches_search(&needle)
        })
        .collect()
}

/// Smallest `DIV-NNN` (n >= 1, zero-padded to three digits) not already used.
/// A suggestion only; the backend decides on uniqueness.
pub fn suggest_division_id(divisions: &[Division]) -> String {
    let existing: HashSet<&str> = divisions
        .iter()
        .map(|division| division.division_id.as_str())
        .collect();

    let mut counter: u32 = 1;
    loop {
        let candidate = format!("{DIVISION_ID_PREFIX}{counter:03}");
        if !existing.contains(candidate.as_str()) {
            return candidate;
        }
        counter += 1;
    }
}

pub fn empty_state_message(search_term: &str, status_filter: StatusFilter) -> &'static str {
    if !search_term.is_empty() || status_filter != StatusFilter::All {
        NO_MATCHES_MESSAGE
    } else {
        NO_RECORDS_MESSAGE
    }
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    divisions: Vec<Division>,
    load_state: LoadState,
    error: Option<String>,
    search_term: String,
    status_filter: StatusFilter,
    draft: DivisionDraft,
    form: FormDialog,
    confirm: ConfirmDialog,
    pending: Option<PendingOperation>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn divisions(&self) -> &[Division] {
        &self.divisions
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn search_term_mut(&mut self) -> &mut String {
        &mut self.search_term
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    pub fn draft(&self) -> &DivisionDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DivisionDraft {
        &mut self.draft
    }

    pub fn form(&self) -> &FormDialog {
        &self.form
    }

    pub fn confirm(&self) -> &ConfirmDialog {
        &self.confirm
    }

    pub fn pending(&self) -> Option<PendingOperation> {
        self.pending
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn filtered(&self) -> Vec<&Division> {
        filter_divisions(&self.divisions, &self.search_term, self.status_filter)
    }

    pub fn empty_state_message(&self) -> &'static str {
        empty_state_message(&self.search_term, self.status_filter)
    }

    pub fn suggest_division_id(&self) -> String {
        suggest_division_id(&self.divisions)
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn begin_load(&mut self) -> ControllerRequest {
        self.load_state = LoadState::Loading;
        self.error = None;
        ControllerRequest::Load
    }

    pub fn open_create(&mut self) {
        self.draft = DivisionDraft::with_division_id(self.suggest_division_id());
        self.form = FormDialog::Create;
    }

    /// Returns false when `id` is not among the loaded records.
    pub fn open_edit(&mut self, id: &RecordId) -> bool {
        let Some(division) = self.divisions.iter().find(|d| &d.id == id) else {
            debug!(id = %id, "edit requested for a division that is not loaded");
            return false;
        };
        self.draft = DivisionDraft::from_division(division);
        self.form = FormDialog::Edit(id.clone());
        true
    }

    pub fn close_form(&mut self) {
        self.form = FormDialog::Closed;
        self.draft = DivisionDraft::default();
    }

    /// Validates the draft and produces the create or update request. On a
    /// validation failure the banner is set and nothing is sent.
    pub fn submit(&mut self) -> Result<ControllerRequest, SubmitError> {
        if self.pending.is_some() {
            return Err(SubmitError::InFlight);
        }
        let target = match &self.form {
            FormDialog::Closed => return Err(SubmitError::NoDialog),
            FormDialog::Create => SaveTarget::Create,
            FormDialog::Edit(id) => SaveTarget::Update(id.clone()),
        };
        let input = match self.draft.to_input() {
            Ok(input) => input,
            Err(err) => {
                self.error = Some(err.to_string());
                return Err(err);
            }
        };

        self.pending = Some(PendingOperation::Save);
        Ok(ControllerRequest::Save { target, input })
    }

    pub fn request_delete(&mut self, id: RecordId) {
        self.confirm = ConfirmDialog::Open(id);
    }

    pub fn cancel_delete(&mut self) {
        self.confirm = ConfirmDialog::Closed;
    }

    pub fn confirm_delete(&mut self) -> Result<ControllerRequest, SubmitError> {
        if self.pending.is_some() {
            return Err(SubmitError::InFlight);
        }
        let ConfirmDialog::Open(id) = &self.confirm else {
            return Err(SubmitError::NoDialog);
        };
        let id = id.clone();

        self.error = None;
        self.pending = Some(PendingOperation::Delete);
        Ok(ControllerRequest::Delete { id })
    }

    /// Clears loading and in-flight markers when a request could not even be
    /// handed to the backend.
    pub fn fail_dispatch(&mut self, message: impl Into<String>) {
        if self.load_state == LoadState::Loading {
            self.load_state = LoadState::Errored;
        }
        if self.pending.take() == Some(PendingOperation::Delete) {
            self.confirm = ConfirmDialog::Closed;
        }
        self.error = Some(message.into());
    }

    pub fn apply(&mut self, outcome: ControllerOutcome) {
        match outcome {
            ControllerOutcome::Loaded(result) => self.apply_reload(result),
            ControllerOutcome::Saved { result, reload } => {
                self.pending = None;
                match result {
                    Ok(_) => {
                        self.close_form();
                        self.error = None;
                        if let Some(reload) = reload {
                            self.apply_reload(reload);
                        }
                    }
                    Err(err) => {
                        self.error = Some(err.user_message(SAVE_FAILED_FALLBACK));
                    }
                }
            }
            ControllerOutcome::Deleted { result, reload } => {
                self.pending = None;
                self.confirm = ConfirmDialog::Closed;
                match result {
                    Ok(()) => {
                        if let Some(reload) = reload {
                            self.apply_reload(reload);
                        }
                    }
                    Err(err) => {
                        self.error = Some(err.user_message(DELETE_FAILED_FALLBACK));
                    }
                }
            }
        }
    }

    fn apply_reload(&mut self, result: Result<Vec<Division>, ClientError>) {
        match result {
            Ok(divisions) => {
                self.divisions = divisions;
                self.load_state = LoadState::Loaded;
            }
            Err(err) => {
                self.error = Some(err.user_message(LOAD_FAILED_FALLBACK));
                self.load_state = LoadState::Errored;
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/view_state_tests.rs"]
mod tests;
