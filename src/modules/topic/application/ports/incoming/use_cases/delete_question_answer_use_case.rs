use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::error::{ClassifiedError, ErrorKind};
use crate::topic::application::domain::entities::Topic;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteQuestionAnswerError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ClassifiedError for DeleteQuestionAnswerError {
    fn kind(&self) -> ErrorKind {
        match self {
            DeleteQuestionAnswerError::TopicNotFound => ErrorKind::NotFound,
            DeleteQuestionAnswerError::RepositoryError(_) => ErrorKind::Internal,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            DeleteQuestionAnswerError::TopicNotFound => "TOPIC_NOT_FOUND",
            DeleteQuestionAnswerError::RepositoryError(_) => "INTERNAL_ERROR",
        }
    }
}

#[async_trait]
pub trait DeleteQuestionAnswerUseCase: Send + Sync {
    /// Removing an entry that is not present leaves the topic unchanged and still succeeds.
    async fn execute(
        &self,
        topic_id: Uuid,
        qa_id: Uuid,
        updated_by: UserId,
    ) -> Result<Topic, DeleteQuestionAnswerError>;
}
