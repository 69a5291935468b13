use async_trait::async_trait;

use crate::shared::error::{ClassifiedError, ErrorKind};
use crate::topic::application::domain::entities::Topic;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTopicError {
    #[error("Topic not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ClassifiedError for GetTopicError {
    fn kind(&self) -> ErrorKind {
        match self {
            GetTopicError::NotFound => ErrorKind::NotFound,
            GetTopicError::RepositoryError(_) => ErrorKind::Internal,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            GetTopicError::NotFound => "TOPIC_NOT_FOUND",
            GetTopicError::RepositoryError(_) => "INTERNAL_ERROR",
        }
    }
}

#[async_trait]
pub trait GetTopicUseCase: Send + Sync {
    /// `identifier` is tried as a topic id first, then as a slug.
    async fn execute(&self, identifier: &str) -> Result<Topic, GetTopicError>;
}
