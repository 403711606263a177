use serde::{Deserialize, Serialize};

use crate::domain::DivisionStatus;

/// Request body for create and update. Text fields are sent as typed so an
/// update can clear them; `budget` is omitted when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionInput {
    pub division_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub head: String,
    #[serde(default)]
    pub parent_organization: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default)]
    pub status: DivisionStatus,
}

impl DivisionInput {
    pub fn new(division_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            division_id: division_id.into(),
            name: name.into(),
            description: String::new(),
            head: String::new(),
            parent_organization: String::new(),
            budget: None,
            status: DivisionStatus::Active,
        }
    }
}
