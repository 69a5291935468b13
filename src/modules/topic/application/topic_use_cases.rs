use std::sync::Arc;

use crate::topic::application::ports::incoming::use_cases::{
    AddQuestionAnswerUseCase, CreateTopicUseCase, DeleteQuestionAnswerUseCase, DeleteTopicUseCase,
    GetTopicUseCase, ListTopicsUseCase, UpdateQuestionAnswerUseCase, UpdateTopicUseCase,
};
use crate::topic::application::ports::outgoing::{TopicQuery, TopicRepository};
use crate::topic::application::services::{
    AddQuestionAnswerService, CreateTopicService, DeleteQuestionAnswerService, DeleteTopicService,
    GetTopicService, ListTopicsService, UpdateQuestionAnswerService, UpdateTopicService,
};

#[derive(Clone)]
pub struct TopicUseCases {
    pub list: Arc<dyn ListTopicsUseCase + Send + Sync>,
    pub get: Arc<dyn GetTopicUseCase + Send + Sync>,
    pub create: Arc<dyn CreateTopicUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateTopicUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTopicUseCase + Send + Sync>,
    pub add_question_answer: Arc<dyn AddQuestionAnswerUseCase + Send + Sync>,
    pub update_question_answer: Arc<dyn UpdateQuestionAnswerUseCase + Send + Sync>,
    pub delete_question_answer: Arc<dyn DeleteQuestionAnswerUseCase + Send + Sync>,
}

impl TopicUseCases {
    /// Wires every topic service over one query adapter and one repository adapter.
    pub fn wire<Q, R>(query: Q, repository: R) -> Self
    where
        Q: TopicQuery + Clone + Send + Sync + 'static,
        R: TopicRepository + Clone + Send + Sync + 'static,
    {
        Self {
            list: Arc::new(ListTopicsService::new(query.clone())),
            get: Arc::new(GetTopicService::new(query.clone())),
            create: Arc::new(CreateTopicService::new(repository.clone())),
            update: Arc::new(UpdateTopicService::new(query.clone(), repository.clone())),
            delete: Arc::new(DeleteTopicService::new(repository.clone())),
            add_question_answer: Arc::new(AddQuestionAnswerService::new(
                query.clone(),
                repository.clone(),
            )),
            update_question_answer: Arc::new(UpdateQuestionAnswerService::new(
                query.clone(),
                repository.clone(),
            )),
            delete_question_answer: Arc::new(DeleteQuestionAnswerService::new(query, repository)),
        }
    }
}
