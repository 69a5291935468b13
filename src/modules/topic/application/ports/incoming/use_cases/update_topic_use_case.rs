use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::error::{ClassifiedError, ErrorKind};
use crate::topic::application::domain::entities::{PatchTopicData, Topic, TopicValidationError};

#[derive(Debug, Clone)]
pub struct UpdateTopicCommand {
    pub topic_id: Uuid,
    pub updated_by: UserId,
    pub patch: PatchTopicData,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateTopicError {
    #[error("Topic not found")]
    NotFound,

    #[error("{0}")]
    Validation(#[from] TopicValidationError),

    #[error("A topic with this title already exists")]
    TopicAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ClassifiedError for UpdateTopicError {
    fn kind(&self) -> ErrorKind {
        match self {
            UpdateTopicError::NotFound => ErrorKind::NotFound,
            UpdateTopicError::Validation(_) => ErrorKind::Validation,
            UpdateTopicError::TopicAlreadyExists => ErrorKind::Conflict,
            UpdateTopicError::RepositoryError(_) => ErrorKind::Internal,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            UpdateTopicError::NotFound => "TOPIC_NOT_FOUND",
            UpdateTopicError::Validation(e) => e.code(),
            UpdateTopicError::TopicAlreadyExists => "TOPIC_ALREADY_EXISTS",
            UpdateTopicError::RepositoryError(_) => "INTERNAL_ERROR",
        }
    }
}

#[async_trait]
pub trait UpdateTopicUseCase: Send + Sync {
    async fn execute(&self, command: UpdateTopicCommand) -> Result<Topic, UpdateTopicError>;
}
