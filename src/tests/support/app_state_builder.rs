use actix_web::web;
use std::sync::Arc;

use crate::tests::support::topic_store::InMemoryTopicStore;
use crate::topic::application::ports::incoming::use_cases::{GetTopicUseCase, ListTopicsUseCase};
use crate::topic::application::topic_use_cases::TopicUseCases;
use crate::AppState;

/// Builds `AppState` with real topic services over an in-memory store.
/// Individual use cases can be swapped for stubs.
pub struct TestAppStateBuilder {
    topic: TopicUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::with_store(InMemoryTopicStore::default())
    }
}

impl TestAppStateBuilder {
    pub fn with_store(store: InMemoryTopicStore) -> Self {
        Self {
            topic: TopicUseCases::wire(store.clone(), store),
        }
    }

    pub fn with_list_topics(mut self, uc: impl ListTopicsUseCase + Send + Sync + 'static) -> Self {
        self.topic.list = Arc::new(uc);
        self
    }

    pub fn with_get_topic(mut self, uc: impl GetTopicUseCase + Send + Sync + 'static) -> Self {
        self.topic.get = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState { topic: self.topic })
    }
}
