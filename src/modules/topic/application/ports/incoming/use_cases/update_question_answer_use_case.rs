use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::error::{ClassifiedError, ErrorKind};
use crate::topic::application::domain::entities::{
    PatchQuestionAnswerData, Topic, TopicValidationError,
};

#[derive(Debug, Clone)]
pub struct UpdateQuestionAnswerCommand {
    pub topic_id: Uuid,
    pub qa_id: Uuid,
    pub updated_by: UserId,
    pub patch: PatchQuestionAnswerData,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateQuestionAnswerError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Q&A not found")]
    QuestionAnswerNotFound,

    #[error("{0}")]
    Validation(#[from] TopicValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ClassifiedError for UpdateQuestionAnswerError {
    fn kind(&self) -> ErrorKind {
        match self {
            UpdateQuestionAnswerError::TopicNotFound
            | UpdateQuestionAnswerError::QuestionAnswerNotFound => ErrorKind::NotFound,
            UpdateQuestionAnswerError::Validation(_) => ErrorKind::Validation,
            UpdateQuestionAnswerError::RepositoryError(_) => ErrorKind::Internal,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            UpdateQuestionAnswerError::TopicNotFound => "TOPIC_NOT_FOUND",
            UpdateQuestionAnswerError::QuestionAnswerNotFound => "QA_NOT_FOUND",
            UpdateQuestionAnswerError::Validation(e) => e.code(),
            UpdateQuestionAnswerError::RepositoryError(_) => "INTERNAL_ERROR",
        }
    }
}

#[async_trait]
pub trait UpdateQuestionAnswerUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateQuestionAnswerCommand,
    ) -> Result<Topic, UpdateQuestionAnswerError>;
}
