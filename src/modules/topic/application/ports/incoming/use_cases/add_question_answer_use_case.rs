use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::error::{ClassifiedError, ErrorKind};
use crate::topic::application::domain::entities::{
    QuestionAnswerDraft, Topic, TopicValidationError,
};

#[derive(Debug, Clone)]
pub struct AddQuestionAnswerCommand {
    topic_id: Uuid,
    updated_by: UserId,
    draft: QuestionAnswerDraft,
}

impl AddQuestionAnswerCommand {
    pub fn new(
        topic_id: Uuid,
        updated_by: UserId,
        question: String,
        answer: String,
        order: Option<i32>,
    ) -> Result<Self, TopicValidationError> {
        Ok(Self {
            topic_id,
            updated_by,
            draft: QuestionAnswerDraft::new(question, answer, order)?,
        })
    }

    pub fn topic_id(&self) -> Uuid {
        self.topic_id
    }

    pub fn updated_by(&self) -> UserId {
        self.updated_by
    }

    pub fn into_draft(self) -> QuestionAnswerDraft {
        self.draft
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddQuestionAnswerError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ClassifiedError for AddQuestionAnswerError {
    fn kind(&self) -> ErrorKind {
        match self {
            AddQuestionAnswerError::TopicNotFound => ErrorKind::NotFound,
            AddQuestionAnswerError::RepositoryError(_) => ErrorKind::Internal,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AddQuestionAnswerError::TopicNotFound => "TOPIC_NOT_FOUND",
            AddQuestionAnswerError::RepositoryError(_) => "INTERNAL_ERROR",
        }
    }
}

#[async_trait]
pub trait AddQuestionAnswerUseCase: Send + Sync {
    /// Appends the entry and returns the whole updated topic.
    async fn execute(&self, command: AddQuestionAnswerCommand)
        -> Result<Topic, AddQuestionAnswerError>;
}
