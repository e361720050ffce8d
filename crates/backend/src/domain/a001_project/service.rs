use super::repository;
use crate::shared::data::db::get_connection;
use contracts::domain::a001_project::{CreateProjectRequest, Project, ProjectNameError};
use sea_orm::{DatabaseConnection, SqlErr};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ProjectServiceError {
    #[error("invalid project name: {0}")]
    InvalidName(#[from] ProjectNameError),
    #[error("project {0:?} already exists")]
    AlreadyExists(String),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Whether a project with exactly this name exists
pub async fn exists(name: &str) -> anyhow::Result<bool> {
    exists_in(get_connection(), name).await
}

pub async fn exists_in(db: &DatabaseConnection, name: &str) -> anyhow::Result<bool> {
    repository::exists_by_name(db, name).await
}

/// All projects ordered by name
pub async fn list_all() -> anyhow::Result<Vec<Project>> {
    repository::list_all(get_connection()).await
}

/// Validate and persist a new project
pub async fn create(request: CreateProjectRequest) -> Result<Uuid, ProjectServiceError> {
    create_in(get_connection(), request).await
}

pub async fn create_in(
    db: &DatabaseConnection,
    request: CreateProjectRequest,
) -> Result<Uuid, ProjectServiceError> {
    let mut aggregate = Project::new_for_insert(request.project_name, request.metadata);

    aggregate.validate()?;

    if repository::exists_by_name(db, &aggregate.name).await? {
        return Err(ProjectServiceError::AlreadyExists(aggregate.name));
    }

    aggregate.before_write();

    // The unique index catches a race between the check and the insert
    match repository::insert(db, &aggregate).await {
        Ok(id) => {
            tracing::info!("Project {:?} created with id {}", aggregate.name, id);
            Ok(id)
        }
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            Err(ProjectServiceError::AlreadyExists(aggregate.name))
        }
        Err(e) => Err(ProjectServiceError::Storage(e.into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::bootstrap_schema;
    use contracts::domain::a001_project::ProjectMetadata;
    use sea_orm::{ConnectOptions, Database};

    async fn memory_db() -> DatabaseConnection {
        // a single pooled connection keeps the in-memory schema alive
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1).min_connections(1);
        let db = Database::connect(opts).await.unwrap();
        bootstrap_schema(&db).await.unwrap();
        db
    }

    fn request(name: &str) -> CreateProjectRequest {
        CreateProjectRequest {
            project_name: name.to_string(),
            metadata: ProjectMetadata::new(),
        }
    }

    #[tokio::test]
    async fn test_create_then_exists() {
        let db = memory_db().await;
        assert!(!exists_in(&db, "library").await.unwrap());

        let mut req = request("library");
        req.metadata.insert("public".into(), "true".into());
        create_in(&db, req).await.unwrap();

        assert!(exists_in(&db, "library").await.unwrap());
        let all = repository::list_all(&db).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].metadata.get("public").map(String::as_str), Some("true"));
    }

    #[tokio::test]
    async fn test_duplicate_name_is_rejected() {
        let db = memory_db().await;
        create_in(&db, request("library")).await.unwrap();

        let err = create_in(&db, request("library")).await.unwrap_err();
        assert!(matches!(err, ProjectServiceError::AlreadyExists(name) if name == "library"));
    }

    #[tokio::test]
    async fn test_illegal_name_is_rejected_before_storage() {
        let db = memory_db().await;
        let err = create_in(&db, request("Library")).await.unwrap_err();
        assert!(matches!(
            err,
            ProjectServiceError::InvalidName(ProjectNameError::InvalidCharacter('L'))
        ));
        assert!(repository::list_all(&db).await.unwrap().is_empty());
    }
}
