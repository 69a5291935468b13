use async_trait::async_trait;
use uuid::Uuid;

use crate::topic::application::domain::{entities::Topic, list_query::TopicListCriteria};

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait TopicQuery: Send + Sync {
    /// Topics matching `criteria`, ordered by [`TopicListCriteria::compare`].
    async fn list_topics(&self, criteria: &TopicListCriteria) -> Result<Vec<Topic>, TopicQueryError>;

    async fn find_by_id(&self, topic_id: Uuid) -> Result<Option<Topic>, TopicQueryError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Topic>, TopicQueryError>;
}
