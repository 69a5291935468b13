use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::topic::application::domain::entities::{QuestionAnswer, Topic};
use crate::topic::application::ports::outgoing::{
    NewTopicData, TopicRepository, TopicRepositoryError,
};

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model, SLUG_UNIQUE_INDEX, TITLE_UNIQUE_INDEX};

#[derive(Debug, Clone)]
pub struct TopicRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicRepository for TopicRepositoryPostgres {
    async fn insert_topic(&self, data: NewTopicData) -> Result<Topic, TopicRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            icon: Set(data.icon),
            preview: Set(data.preview),
            description: Set(data.description),
            slug: Set(data.slug),
            questions_answers: Set(to_json(&data.questions_answers)?),
            is_active: Set(data.is_active),
            display_order: Set(data.order),
            created_by: Set(Some(data.created_by.into())),
            updated_by: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_write_err)?;

        to_topic(inserted)
    }

    async fn replace_topic(&self, topic: &Topic) -> Result<Topic, TopicRepositoryError> {
        #[allow(unused_mut)]
        let mut model = ActiveModel {
            title: Set(topic.title.clone()),
            icon: Set(topic.icon.clone()),
            preview: Set(topic.preview.clone()),
            description: Set(topic.description.clone()),
            slug: Set(topic.slug.clone()),
            questions_answers: Set(to_json(&topic.questions_answers)?),
            is_active: Set(topic.is_active),
            display_order: Set(topic.order),
            updated_by: Set(topic.updated_by.map(Uuid::from)),
            ..Default::default()
        };

        // update_many bypasses ActiveModelBehavior
        #[cfg(feature = "no_db_triggers")]
        {
            model.updated_at = Set(Utc::now().fixed_offset());
        }

        let rows = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(topic.id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_write_err)?;

        let row = rows
            .into_iter()
            .next()
            .ok_or(TopicRepositoryError::NotFound)?;

        to_topic(row)
    }

    async fn delete_topic(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError> {
        let result = Entity::delete_by_id(topic_id)
            .exec(&*self.db)
            .await
            .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(TopicRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn to_topic(model: Model) -> Result<Topic, TopicRepositoryError> {
    model
        .into_topic()
        .map_err(|e| TopicRepositoryError::SerializationError(e.to_string()))
}

fn to_json(entries: &[QuestionAnswer]) -> Result<serde_json::Value, TopicRepositoryError> {
    serde_json::to_value(entries)
        .map_err(|e| TopicRepositoryError::SerializationError(e.to_string()))
}

/// Unique violations become conflicts, told apart by index name; anything else is a store failure.
fn map_write_err(e: DbErr) -> TopicRepositoryError {
    let violation = match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => Some(detail),
        _ => {
            let msg = e.to_string();
            let lower = msg.to_lowercase();
            (lower.contains("duplicate") || lower.contains("unique") || lower.contains("23505"))
                .then_some(msg)
        }
    };

    match violation {
        Some(detail) if detail.contains(SLUG_UNIQUE_INDEX) => TopicRepositoryError::SlugAlreadyExists,
        Some(detail) => {
            if !detail.contains(TITLE_UNIQUE_INDEX) {
                tracing::debug!(%detail, "Unique violation without a known index name");
            }
            TopicRepositoryError::TitleAlreadyExists
        }
        None => TopicRepositoryError::DatabaseError(e.to_string()),
    }
}

// ============================================================================
// Tests
// ============================================================================
