use async_trait::async_trait;

use crate::topic::application::domain::entities::Topic;
use crate::topic::application::domain::list_query::TopicListParams;
use crate::topic::application::ports::incoming::use_cases::{
    GetTopicError, GetTopicUseCase, ListTopicsError, ListTopicsUseCase, TopicList,
};

#[derive(Clone)]
pub struct StubListTopicsUseCase {
    result: Result<TopicList, ListTopicsError>,
}

impl StubListTopicsUseCase {
    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(ListTopicsError::RepositoryError(msg.into())),
        }
    }
}

#[async_trait]
impl ListTopicsUseCase for StubListTopicsUseCase {
    async fn execute(&self, _params: TopicListParams) -> Result<TopicList, ListTopicsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetTopicUseCase {
    result: Result<Topic, GetTopicError>,
}

impl StubGetTopicUseCase {
    pub fn found(topic: Topic) -> Self {
        Self { result: Ok(topic) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetTopicError::RepositoryError(msg.into())),
        }
    }
}

#[async_trait]
impl GetTopicUseCase for StubGetTopicUseCase {
    async fn execute(&self, _identifier: &str) -> Result<Topic, GetTopicError> {
        self.result.clone()
    }
}
