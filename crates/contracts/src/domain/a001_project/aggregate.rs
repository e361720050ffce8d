use crate::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Free-form project metadata (key to value)
pub type ProjectMetadata = BTreeMap<String, String>;

// ============================================================================
// ID Type
// ============================================================================

/// Project identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub Uuid);

impl ProjectId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ProjectId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProjectId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub metadata: ProjectMetadata,
    #[serde(flatten)]
    pub lifecycle: EntityMetadata,
}

impl Project {
    /// New project ready to be inserted
    pub fn new_for_insert(name: String, metadata: ProjectMetadata) -> Self {
        Self {
            id: ProjectId::new_v4(),
            name,
            metadata,
            lifecycle: EntityMetadata::new(),
        }
    }

    /// Check the name rules
    pub fn validate(&self) -> Result<(), super::ProjectNameError> {
        super::validate_project_name(&self.name)
    }

    /// Hook run right before the row is written
    pub fn before_write(&mut self) {
        self.lifecycle.touch();
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Draft edited in the create dialog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub name: String,
    pub metadata: ProjectMetadata,
}

impl ProjectDraft {
    pub fn to_request(&self) -> CreateProjectRequest {
        CreateProjectRequest {
            project_name: self.name.clone(),
            metadata: self.metadata.clone(),
        }
    }
}

/// Body of POST /api/projects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    pub project_name: String,
    #[serde(default)]
    pub metadata: ProjectMetadata,
}

/// Body of a 201 Created response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCreatedResponse {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_project_name_field() {
        let mut draft = ProjectDraft {
            name: "library".into(),
            ..Default::default()
        };
        draft.metadata.insert("public".into(), "true".into());

        let json = serde_json::to_value(draft.to_request()).unwrap();
        assert_eq!(json["project_name"], "library");
        assert_eq!(json["metadata"]["public"], "true");
    }

    #[test]
    fn test_request_metadata_defaults_to_empty() {
        let req: CreateProjectRequest =
            serde_json::from_str(r#"{"project_name":"library"}"#).unwrap();
        assert!(req.metadata.is_empty());
    }

    #[test]
    fn test_project_id_roundtrip_from_string() {
        let id = ProjectId::new_v4();
        assert_eq!(ProjectId::from_string(&id.as_string()), Ok(id));
        assert!(ProjectId::from_string("not-a-uuid").is_err());
    }
}
