use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::domain::a001_project;
use crate::domain::a001_project::service::ProjectServiceError;
use contracts::domain::a001_project::{CreateProjectRequest, Project, ProjectCreatedResponse};

#[derive(Debug, Deserialize)]
pub struct ExistsQuery {
    pub project_name: Option<String>,
}

/// HEAD /api/projects?project_name=
///
/// 200 when a project with exactly this name exists, 404 otherwise.
pub async fn check_exists(Query(query): Query<ExistsQuery>) -> StatusCode {
    let Some(name) = query.project_name.filter(|n| !n.is_empty()) else {
        return StatusCode::BAD_REQUEST;
    };
    match a001_project::service::exists(&name).await {
        Ok(true) => StatusCode::OK,
        Ok(false) => StatusCode::NOT_FOUND,
        Err(e) => {
            tracing::error!("Project existence check failed for {:?}: {}", name, e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// GET /api/projects
pub async fn list_all() -> Result<Json<Vec<Project>>, StatusCode> {
    match a001_project::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list projects: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/projects
pub async fn create(Json(request): Json<CreateProjectRequest>) -> Response {
    match a001_project::service::create(request).await {
        Ok(id) => (
            StatusCode::CREATED,
            Json(ProjectCreatedResponse { id: id.to_string() }),
        )
            .into_response(),
        Err(e) => {
            let status = status_for(&e);
            if status.is_server_error() {
                tracing::error!("Project creation failed: {}", e);
            } else {
                tracing::warn!("Project creation rejected: {}", e);
            }
            (status, Json(json!({ "error": e.to_string() }))).into_response()
        }
    }
}

pub fn status_for(error: &ProjectServiceError) -> StatusCode {
    match error {
        ProjectServiceError::InvalidName(_) => StatusCode::BAD_REQUEST,
        ProjectServiceError::AlreadyExists(_) => StatusCode::CONFLICT,
        ProjectServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_project::ProjectNameError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&ProjectServiceError::InvalidName(ProjectNameError::TooShort)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&ProjectServiceError::AlreadyExists("library".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(&ProjectServiceError::Storage(anyhow::anyhow!("disk full"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
