use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::topic::application::domain::entities::{QuestionAnswer, Topic};
use crate::topic::application::domain::list_query::TopicView;
use crate::topic::application::ports::incoming::use_cases::TopicList;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionAnswerResponse {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub order: i32,
}

impl From<QuestionAnswer> for QuestionAnswerResponse {
    fn from(qa: QuestionAnswer) -> Self {
        Self {
            id: qa.id,
            question: qa.question,
            answer: qa.answer,
            order: qa.order,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopicResponse {
    pub id: Uuid,
    pub title: String,
    pub icon: String,
    pub preview: String,
    pub description: String,
    pub slug: String,
    /// Omitted from list results unless `include_qa=true`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions_answers: Option<Vec<QuestionAnswerResponse>>,
    pub is_active: bool,
    pub order: i32,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Topic> for TopicResponse {
    fn from(topic: Topic) -> Self {
        Self {
            id: topic.id,
            title: topic.title,
            icon: topic.icon,
            preview: topic.preview,
            description: topic.description,
            slug: topic.slug,
            questions_answers: Some(
                topic
                    .questions_answers
                    .into_iter()
                    .map(QuestionAnswerResponse::from)
                    .collect(),
            ),
            is_active: topic.is_active,
            order: topic.order,
            created_by: topic.created_by.map(|u| u.value()),
            updated_by: topic.updated_by.map(|u| u.value()),
            created_at: topic.created_at,
            updated_at: topic.updated_at,
        }
    }
}

impl From<TopicView> for TopicResponse {
    fn from(view: TopicView) -> Self {
        Self {
            id: view.id,
            title: view.title,
            icon: view.icon,
            preview: view.preview,
            description: view.description,
            slug: view.slug,
            questions_answers: view
                .questions_answers
                .map(|qas| qas.into_iter().map(QuestionAnswerResponse::from).collect()),
            is_active: view.is_active,
            order: view.order,
            created_by: view.created_by.map(|u| u.value()),
            updated_by: view.updated_by.map(|u| u.value()),
            created_at: view.created_at,
            updated_at: view.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TopicListResponse {
    pub items: Vec<TopicResponse>,
    pub count: usize,
}

impl From<TopicList> for TopicListResponse {
    fn from(list: TopicList) -> Self {
        Self {
            count: list.count,
            items: list.items.into_iter().map(TopicResponse::from).collect(),
        }
    }
}
