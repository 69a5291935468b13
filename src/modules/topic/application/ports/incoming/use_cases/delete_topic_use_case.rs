use async_trait::async_trait;
use uuid::Uuid;

use crate::shared::error::{ClassifiedError, ErrorKind};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteTopicError {
    #[error("Topic not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ClassifiedError for DeleteTopicError {
    fn kind(&self) -> ErrorKind {
        match self {
            DeleteTopicError::NotFound => ErrorKind::NotFound,
            DeleteTopicError::RepositoryError(_) => ErrorKind::Internal,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            DeleteTopicError::NotFound => "TOPIC_NOT_FOUND",
            DeleteTopicError::RepositoryError(_) => "INTERNAL_ERROR",
        }
    }
}

#[async_trait]
pub trait DeleteTopicUseCase: Send + Sync {
    /// Removes the topic together with its embedded Q&A entries.
    async fn execute(&self, topic_id: Uuid) -> Result<(), DeleteTopicError>;
}
