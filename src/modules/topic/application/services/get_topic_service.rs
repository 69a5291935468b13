use async_trait::async_trait;
use uuid::Uuid;

use crate::topic::application::domain::entities::Topic;
use crate::topic::application::ports::{
    incoming::use_cases::{GetTopicError, GetTopicUseCase},
    outgoing::{TopicQuery, TopicQueryError},
};

#[derive(Debug, Clone)]
pub struct GetTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

fn map_query_err(e: TopicQueryError) -> GetTopicError {
    tracing::error!(error = %e, "Failed to load topic");
    GetTopicError::RepositoryError(e.to_string())
}

#[async_trait]
impl<Q> GetTopicUseCase for GetTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self, identifier: &str) -> Result<Topic, GetTopicError> {
        if let Ok(topic_id) = Uuid::parse_str(identifier) {
            if let Some(topic) = self.query.find_by_id(topic_id).await.map_err(map_query_err)? {
                return Ok(topic);
            }
        }

        self.query
            .find_by_slug(identifier)
            .await
            .map_err(map_query_err)?
            .ok_or(GetTopicError::NotFound)
    }
}
