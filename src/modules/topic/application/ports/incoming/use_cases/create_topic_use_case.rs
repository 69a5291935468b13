use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::shared::error::{ClassifiedError, ErrorKind};
use crate::topic::application::domain::entities::{
    normalize_description, normalize_icon, normalize_preview, normalize_title,
    QuestionAnswerDraft, Topic, TopicValidationError,
};

//
// ──────────────────────────────────────────────────────────
// Create Topic Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct QuestionAnswerInput {
    pub question: String,
    pub answer: String,
    pub order: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct CreateTopicInput {
    pub title: String,
    pub icon: Option<String>,
    pub preview: String,
    pub description: String,
    pub questions_answers: Vec<QuestionAnswerInput>,
    pub is_active: Option<bool>,
    pub order: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct CreateTopicCommand {
    created_by: UserId,
    title: String,
    icon: String,
    preview: String,
    description: String,
    questions_answers: Vec<QuestionAnswerDraft>,
    is_active: bool,
    order: i32,
}

impl CreateTopicCommand {
    pub fn new(created_by: UserId, input: CreateTopicInput) -> Result<Self, TopicValidationError> {
        let questions_answers = input
            .questions_answers
            .into_iter()
            .map(|qa| QuestionAnswerDraft::new(qa.question, qa.answer, qa.order))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            created_by,
            title: normalize_title(&input.title)?,
            icon: normalize_icon(input.icon),
            preview: normalize_preview(&input.preview)?,
            description: normalize_description(input.description)?,
            questions_answers,
            is_active: input.is_active.unwrap_or(true),
            order: input.order.unwrap_or(0),
        })
    }

    pub fn created_by(&self) -> UserId {
        self.created_by
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn preview(&self) -> &str {
        &self.preview
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn order(&self) -> i32 {
        self.order
    }

    pub fn into_question_answers(self) -> Vec<QuestionAnswerDraft> {
        self.questions_answers
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTopicError {
    #[error("A topic with this title already exists")]
    TopicAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ClassifiedError for CreateTopicError {
    fn kind(&self) -> ErrorKind {
        match self {
            CreateTopicError::TopicAlreadyExists => ErrorKind::Conflict,
            CreateTopicError::RepositoryError(_) => ErrorKind::Internal,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            CreateTopicError::TopicAlreadyExists => "TOPIC_ALREADY_EXISTS",
            CreateTopicError::RepositoryError(_) => "INTERNAL_ERROR",
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(&self, command: CreateTopicCommand) -> Result<Topic, CreateTopicError>;
}
