use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::entities::Topic;
use crate::topic::application::ports::{
    incoming::use_cases::{DeleteQuestionAnswerError, DeleteQuestionAnswerUseCase},
    outgoing::{TopicQuery, TopicRepository, TopicRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteQuestionAnswerService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteQuestionAnswerService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeleteQuestionAnswerUseCase for DeleteQuestionAnswerService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    async fn execute(
        &self,
        topic_id: Uuid,
        qa_id: Uuid,
        updated_by: UserId,
    ) -> Result<Topic, DeleteQuestionAnswerError> {
        let mut topic = self
            .query
            .find_by_id(topic_id)
            .await
            .map_err(|e| DeleteQuestionAnswerError::RepositoryError(e.to_string()))?
            .ok_or(DeleteQuestionAnswerError::TopicNotFound)?;

        if !topic.remove_question_answer(qa_id) {
            tracing::debug!(%topic_id, %qa_id, "Q&A already absent, nothing to delete");
            return Ok(topic);
        }
        topic.updated_by = Some(updated_by);

        let saved = self
            .repository
            .replace_topic(&topic)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::NotFound => DeleteQuestionAnswerError::TopicNotFound,
                other => {
                    tracing::error!(error = %other, %topic_id, "Failed to delete Q&A");
                    DeleteQuestionAnswerError::RepositoryError(other.to_string())
                }
            })?;

        tracing::info!(%topic_id, %qa_id, "Q&A deleted");
        Ok(saved)
    }
}
