use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend-assigned record identifier. The service may hand out numeric or
/// string ids, so both are accepted on the wire and held as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawRecordId", into = "String")]
pub struct RecordId(pub String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRecordId {
    Text(String),
    Integer(i64),
}

impl From<RawRecordId> for RecordId {
    fn from(value: RawRecordId) -> Self {
        match value {
            RawRecordId::Text(text) => Self(text),
            RawRecordId::Integer(n) => Self(n.to_string()),
        }
    }
}

impl From<RecordId> for String {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivisionStatus {
    #[default]
    Active,
    Inactive,
}

impl DivisionStatus {
    pub const ALL: [DivisionStatus; 2] = [DivisionStatus::Active, DivisionStatus::Inactive];

    pub fn as_str(self) -> &'static str {
        match self {
            DivisionStatus::Active => "active",
            DivisionStatus::Inactive => "inactive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DivisionStatus::Active => "Active",
            DivisionStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for DivisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status predicate applied to the loaded list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(DivisionStatus),
}

impl StatusFilter {
    pub const OPTIONS: [StatusFilter; 3] = [
        StatusFilter::All,
        StatusFilter::Only(DivisionStatus::Active),
        StatusFilter::Only(DivisionStatus::Inactive),
    ];

    pub fn matches(self, status: DivisionStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All Status",
            StatusFilter::Only(status) => status.label(),
        }
    }

    /// Parses `all`, `active` or `inactive` (case-insensitive).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "all" => Some(StatusFilter::All),
            "active" => Some(StatusFilter::Only(DivisionStatus::Active)),
            "inactive" => Some(StatusFilter::Only(DivisionStatus::Inactive)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Division {
    #[serde(alias = "_id")]
    pub id: RecordId,
    pub division_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default)]
    pub status: DivisionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Division {
    /// `needle` must already be lowercased. An empty needle matches everything.
    pub fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let contains = |field: Option<&str>| {
            field.is_some_and(|value| value.to_lowercase().contains(needle))
        };
        contains(Some(&self.name))
            || contains(self.description.as_deref())
            || contains(self.head.as_deref())
    }
}
