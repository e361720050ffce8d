use chrono::Utc;
use contracts::domain::a001_project::{Project, ProjectId, ProjectMetadata};
use contracts::domain::common::EntityMetadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;

use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_project")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub name: String,
    /// JSON object with string values
    pub metadata: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Project {
    type Error = uuid::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let uuid = Uuid::parse_str(&m.id)?;
        let metadata: ProjectMetadata = serde_json::from_str(&m.metadata).unwrap_or_else(|e| {
            tracing::warn!("project {} has unreadable metadata: {}", m.id, e);
            ProjectMetadata::new()
        });

        Ok(Project {
            id: ProjectId(uuid),
            name: m.name,
            metadata,
            lifecycle: EntityMetadata {
                created_at: m.created_at.unwrap_or_else(Utc::now),
                updated_at: m.updated_at.unwrap_or_else(Utc::now),
                version: m.version,
            },
        })
    }
}

pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<Project>> {
    let items = Entity::find()
        .order_by_asc(Column::Name)
        .all(db)
        .await?
        .into_iter()
        .filter_map(|m| {
            let id = m.id.clone();
            Project::try_from(m)
                .map_err(|e| tracing::warn!("skipping project row with bad id {:?}: {}", id, e))
                .ok()
        })
        .collect();
    Ok(items)
}

pub async fn exists_by_name(db: &DatabaseConnection, name: &str) -> anyhow::Result<bool> {
    let count = Entity::find()
        .filter(Column::Name.eq(name))
        .count(db)
        .await?;
    Ok(count > 0)
}

/// Insert a new row. The raw `DbErr` is returned so callers can tell a unique
/// violation apart from other storage failures.
pub async fn insert(db: &DatabaseConnection, aggregate: &Project) -> Result<Uuid, DbErr> {
    let uuid = aggregate.id.value();
    let metadata = serde_json::to_string(&aggregate.metadata)
        .map_err(|e| DbErr::Custom(format!("metadata serialization failed: {e}")))?;
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        name: Set(aggregate.name.clone()),
        metadata: Set(metadata),
        created_at: Set(Some(aggregate.lifecycle.created_at)),
        updated_at: Set(Some(aggregate.lifecycle.updated_at)),
        version: Set(aggregate.lifecycle.version),
    };
    active.insert(db).await?;
    Ok(uuid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::bootstrap_schema;
    use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseBackend, Statement};

    #[tokio::test]
    async fn test_list_skips_rows_with_unparseable_id() {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1).min_connections(1);
        let db = Database::connect(opts).await.unwrap();
        bootstrap_schema(&db).await.unwrap();

        let good = Project::new_for_insert("library".into(), ProjectMetadata::new());
        insert(&db, &good).await.unwrap();
        db.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            "INSERT INTO a001_project (id, name, metadata, version) \
             VALUES ('not-a-uuid', 'broken', '{}', 0)"
                .to_string(),
        ))
        .await
        .unwrap();

        let first = list_all(&db).await.unwrap();
        let second = list_all(&db).await.unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].id, good.id);
        assert_eq!(second[0].id, good.id);
    }
}
