pub mod aggregate;
pub mod validation;

pub use aggregate::{
    CreateProjectRequest, Project, ProjectCreatedResponse, ProjectDraft, ProjectId,
    ProjectMetadata,
};
pub use validation::{validate_project_name, ProjectNameError};
