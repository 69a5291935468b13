use async_trait::async_trait;

use crate::shared::error::{ClassifiedError, ErrorKind};
use crate::topic::application::domain::list_query::{TopicListParams, TopicView};

#[derive(Debug, Clone)]
pub struct TopicList {
    pub items: Vec<TopicView>,
    pub count: usize,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListTopicsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ClassifiedError for ListTopicsError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Internal
    }

    fn code(&self) -> &'static str {
        "INTERNAL_ERROR"
    }
}

#[async_trait]
pub trait ListTopicsUseCase: Send + Sync {
    async fn execute(&self, params: TopicListParams) -> Result<TopicList, ListTopicsError>;
}
