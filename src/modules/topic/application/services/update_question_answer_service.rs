use async_trait::async_trait;

use crate::topic::application::domain::entities::Topic;
use crate::topic::application::ports::{
    incoming::use_cases::{
        UpdateQuestionAnswerCommand, UpdateQuestionAnswerError, UpdateQuestionAnswerUseCase,
    },
    outgoing::{TopicQuery, TopicRepository, TopicRepositoryError},
};

#[derive(Debug, Clone)]
pub struct UpdateQuestionAnswerService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateQuestionAnswerService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateQuestionAnswerUseCase for UpdateQuestionAnswerService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateQuestionAnswerCommand,
    ) -> Result<Topic, UpdateQuestionAnswerError> {
        let mut topic = self
            .query
            .find_by_id(command.topic_id)
            .await
            .map_err(|e| UpdateQuestionAnswerError::RepositoryError(e.to_string()))?
            .ok_or(UpdateQuestionAnswerError::TopicNotFound)?;

        topic
            .question_answer_mut(command.qa_id)
            .ok_or(UpdateQuestionAnswerError::QuestionAnswerNotFound)?
            .apply_patch(command.patch)?;
        topic.updated_by = Some(command.updated_by);

        let saved = self
            .repository
            .replace_topic(&topic)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::NotFound => UpdateQuestionAnswerError::TopicNotFound,
                other => {
                    tracing::error!(error = %other, topic_id = %topic.id, "Failed to update Q&A");
                    UpdateQuestionAnswerError::RepositoryError(other.to_string())
                }
            })?;

        tracing::info!(topic_id = %saved.id, qa_id = %command.qa_id, "Q&A updated");
        Ok(saved)
    }
}
