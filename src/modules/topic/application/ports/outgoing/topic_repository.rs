use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::entities::{QuestionAnswer, Topic};

/// Fully validated topic ready to be stored. Id and timestamps are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewTopicData {
    pub title: String,
    pub icon: String,
    pub preview: String,
    pub description: String,
    pub slug: String,
    pub questions_answers: Vec<QuestionAnswer>,
    pub is_active: bool,
    pub order: i32,
    pub created_by: UserId,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Topic not found")]
    NotFound,

    #[error("Title already exists")]
    TitleAlreadyExists,

    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl TopicRepositoryError {
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            TopicRepositoryError::TitleAlreadyExists | TopicRepositoryError::SlugAlreadyExists
        )
    }
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn insert_topic(&self, data: NewTopicData) -> Result<Topic, TopicRepositoryError>;

    /// Overwrites every mutable field of the stored aggregate, Q&A collection included.
    /// `created_at` and `created_by` are never touched.
    async fn replace_topic(&self, topic: &Topic) -> Result<Topic, TopicRepositoryError>;

    async fn delete_topic(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError>;
}
