use async_trait::async_trait;

use crate::topic::application::domain::entities::Topic;
use crate::topic::application::ports::{
    incoming::use_cases::{UpdateTopicCommand, UpdateTopicError, UpdateTopicUseCase},
    outgoing::{TopicQuery, TopicRepository, TopicRepositoryError},
};

#[derive(Debug, Clone)]
pub struct UpdateTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateTopicUseCase for UpdateTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateTopicCommand) -> Result<Topic, UpdateTopicError> {
        let mut topic = self
            .query
            .find_by_id(command.topic_id)
            .await
            .map_err(|e| UpdateTopicError::RepositoryError(e.to_string()))?
            .ok_or(UpdateTopicError::NotFound)?;

        let title_changed = topic.apply_patch(command.patch, command.updated_by)?;

        let saved = self
            .repository
            .replace_topic(&topic)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::NotFound => UpdateTopicError::NotFound,
                e if e.is_duplicate() => UpdateTopicError::TopicAlreadyExists,
                other => {
                    tracing::error!(error = %other, topic_id = %topic.id, "Failed to update topic");
                    UpdateTopicError::RepositoryError(other.to_string())
                }
            })?;

        tracing::info!(topic_id = %saved.id, title_changed, "Topic updated");
        Ok(saved)
    }
}
