use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::topic::application::domain::{entities::Topic, list_query::TopicListCriteria};
use crate::topic::application::ports::outgoing::{TopicQuery, TopicQueryError};

use super::sea_orm_entity::{Column, Entity, Model};

#[derive(Debug, Clone)]
pub struct TopicQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicQuery for TopicQueryPostgres {
    async fn list_topics(&self, criteria: &TopicListCriteria) -> Result<Vec<Topic>, TopicQueryError> {
        let mut query = Entity::find().filter(Column::IsActive.eq(criteria.is_active()));

        if let Some(pattern) = criteria.search_pattern() {
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::Title).ilike(&pattern))
                    .add(Expr::col(Column::Preview).ilike(&pattern))
                    .add(Expr::col(Column::Description).ilike(&pattern)),
            );
        }

        let rows = query
            .order_by_asc(Column::DisplayOrder)
            .order_by_desc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(to_topic).collect()
    }

    async fn find_by_id(&self, topic_id: Uuid) -> Result<Option<Topic>, TopicQueryError> {
        Entity::find_by_id(topic_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(to_topic)
            .transpose()
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Topic>, TopicQueryError> {
        Entity::find()
            .filter(Column::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(to_topic)
            .transpose()
    }
}

fn to_topic(model: Model) -> Result<Topic, TopicQueryError> {
    let topic_id = model.id;
    model.into_topic().map_err(|e| {
        tracing::error!(%topic_id, error = %e, "Stored Q&A collection is malformed");
        TopicQueryError::SerializationError(e.to_string())
    })
}

fn map_db_err(e: DbErr) -> TopicQueryError {
    TopicQueryError::DatabaseError(e.to_string())
}
