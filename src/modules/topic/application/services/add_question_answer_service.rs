use async_trait::async_trait;

use crate::topic::application::domain::entities::Topic;
use crate::topic::application::ports::{
    incoming::use_cases::{AddQuestionAnswerCommand, AddQuestionAnswerError, AddQuestionAnswerUseCase},
    outgoing::{TopicQuery, TopicRepository, TopicRepositoryError},
};

#[derive(Debug, Clone)]
pub struct AddQuestionAnswerService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> AddQuestionAnswerService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> AddQuestionAnswerUseCase for AddQuestionAnswerService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: AddQuestionAnswerCommand,
    ) -> Result<Topic, AddQuestionAnswerError> {
        let mut topic = self
            .query
            .find_by_id(command.topic_id())
            .await
            .map_err(|e| AddQuestionAnswerError::RepositoryError(e.to_string()))?
            .ok_or(AddQuestionAnswerError::TopicNotFound)?;

        topic.updated_by = Some(command.updated_by());
        let qa_id = topic.append_question_answer(command.into_draft());

        let saved = self
            .repository
            .replace_topic(&topic)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::NotFound => AddQuestionAnswerError::TopicNotFound,
                other => {
                    tracing::error!(error = %other, topic_id = %topic.id, "Failed to add Q&A");
                    AddQuestionAnswerError::RepositoryError(other.to_string())
                }
            })?;

        tracing::info!(topic_id = %saved.id, %qa_id, "Q&A added");
        Ok(saved)
    }
}
