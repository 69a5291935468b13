use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::error::{ClassifiedError, ErrorKind};
use crate::shared::patch::PatchField;

use super::slug::derive_slug;

pub const DEFAULT_TOPIC_ICON: &str = "📚";
pub const PREVIEW_MAX_CHARS: usize = 150;

//
// ──────────────────────────────────────────────────────────
// Validation
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopicValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title must contain at least one letter or digit")]
    TitleWithoutSlug,

    #[error("Preview cannot be empty")]
    EmptyPreview,

    #[error("Preview must not exceed 150 characters")]
    PreviewTooLong,

    #[error("Description cannot be empty")]
    EmptyDescription,

    #[error("Question cannot be empty")]
    EmptyQuestion,

    #[error("Answer cannot be empty")]
    EmptyAnswer,

    #[error("{0} cannot be null")]
    NullField(&'static str),
}

impl ClassifiedError for TopicValidationError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }

    fn code(&self) -> &'static str {
        match self {
            TopicValidationError::EmptyTitle => "EMPTY_TITLE",
            TopicValidationError::TitleWithoutSlug => "INVALID_TITLE",
            TopicValidationError::EmptyPreview => "EMPTY_PREVIEW",
            TopicValidationError::PreviewTooLong => "PREVIEW_TOO_LONG",
            TopicValidationError::EmptyDescription => "EMPTY_DESCRIPTION",
            TopicValidationError::EmptyQuestion => "EMPTY_QUESTION",
            TopicValidationError::EmptyAnswer => "EMPTY_ANSWER",
            TopicValidationError::NullField(_) => "NULL_FIELD",
        }
    }
}

/// Trimmed title. A title whose slug would be empty is rejected here so the
/// slug column never receives an empty value.
pub fn normalize_title(raw: &str) -> Result<String, TopicValidationError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(TopicValidationError::EmptyTitle);
    }
    if derive_slug(title).is_empty() {
        return Err(TopicValidationError::TitleWithoutSlug);
    }
    Ok(title.to_string())
}

pub fn normalize_icon(raw: Option<String>) -> String {
    match raw {
        Some(icon) if !icon.trim().is_empty() => icon.trim().to_string(),
        _ => DEFAULT_TOPIC_ICON.to_string(),
    }
}

pub fn normalize_preview(raw: &str) -> Result<String, TopicValidationError> {
    let preview = raw.trim();
    if preview.is_empty() {
        return Err(TopicValidationError::EmptyPreview);
    }
    if preview.chars().count() > PREVIEW_MAX_CHARS {
        return Err(TopicValidationError::PreviewTooLong);
    }
    Ok(preview.to_string())
}

/// Descriptions keep their formatting; only blank text is refused.
pub fn normalize_description(raw: String) -> Result<String, TopicValidationError> {
    if raw.trim().is_empty() {
        return Err(TopicValidationError::EmptyDescription);
    }
    Ok(raw)
}

fn normalize_question(raw: &str) -> Result<String, TopicValidationError> {
    let question = raw.trim();
    if question.is_empty() {
        return Err(TopicValidationError::EmptyQuestion);
    }
    Ok(question.to_string())
}

fn normalize_answer(raw: String) -> Result<String, TopicValidationError> {
    if raw.trim().is_empty() {
        return Err(TopicValidationError::EmptyAnswer);
    }
    Ok(raw)
}

//
// ──────────────────────────────────────────────────────────
// Question & Answer
// ──────────────────────────────────────────────────────────
//

/// Entry owned by a topic. Its id only has meaning inside the parent's list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub order: i32,
}

/// Validated input for a new entry; the id is assigned on insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionAnswerDraft {
    question: String,
    answer: String,
    order: i32,
}

impl QuestionAnswerDraft {
    pub fn new(
        question: String,
        answer: String,
        order: Option<i32>,
    ) -> Result<Self, TopicValidationError> {
        Ok(Self {
            question: normalize_question(&question)?,
            answer: normalize_answer(answer)?,
            order: order.unwrap_or(0),
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    fn into_entry(self, id: Uuid) -> QuestionAnswer {
        QuestionAnswer {
            id,
            question: self.question,
            answer: self.answer,
            order: self.order,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PatchQuestionAnswerData {
    pub question: PatchField<String>,
    pub answer: PatchField<String>,
    pub order: PatchField<i32>,
}

impl QuestionAnswer {
    /// Merges supplied fields. Nothing is written unless every supplied field is valid.
    pub fn apply_patch(&mut self, patch: PatchQuestionAnswerData) -> Result<(), TopicValidationError> {
        let question = patch
            .question
            .required(TopicValidationError::EmptyQuestion)?
            .map(|q| normalize_question(&q))
            .transpose()?;
        let answer = patch
            .answer
            .required(TopicValidationError::EmptyAnswer)?
            .map(normalize_answer)
            .transpose()?;
        let order = patch.order.required(TopicValidationError::NullField("order"))?;

        if let Some(question) = question {
            self.question = question;
        }
        if let Some(answer) = answer {
            self.answer = answer;
        }
        if let Some(order) = order {
            self.order = order;
        }
        Ok(())
    }
}

fn fresh_entry_id(existing: &[QuestionAnswer]) -> Uuid {
    loop {
        let id = Uuid::new_v4();
        if existing.iter().all(|qa| qa.id != id) {
            return id;
        }
    }
}

/// Turns drafts into entries with ids unique within the resulting list.
pub fn build_question_answers(drafts: Vec<QuestionAnswerDraft>) -> Vec<QuestionAnswer> {
    let mut entries: Vec<QuestionAnswer> = Vec::with_capacity(drafts.len());
    for draft in drafts {
        let id = fresh_entry_id(&entries);
        entries.push(draft.into_entry(id));
    }
    entries
}

//
// ──────────────────────────────────────────────────────────
// Topic aggregate
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct Topic {
    pub id: Uuid,
    pub title: String,
    pub icon: String,
    pub preview: String,
    pub description: String,
    pub slug: String,
    pub questions_answers: Vec<QuestionAnswer>,
    pub is_active: bool,
    pub order: i32,
    pub created_by: Option<UserId>,
    pub updated_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update of the topic's own fields. `Null` resets the icon to its
/// default and is a validation error for every other field.
#[derive(Debug, Clone, Default)]
pub struct PatchTopicData {
    pub title: PatchField<String>,
    pub icon: PatchField<String>,
    pub preview: PatchField<String>,
    pub description: PatchField<String>,
    pub is_active: PatchField<bool>,
    pub order: PatchField<i32>,
}

impl Topic {
    /// Merges `patch` over the aggregate and stamps `updated_by`.
    ///
    /// The slug is rederived only when the title actually changes. Returns
    /// whether it did. On validation failure the aggregate is left untouched.
    pub fn apply_patch(
        &mut self,
        patch: PatchTopicData,
        acting: UserId,
    ) -> Result<bool, TopicValidationError> {
        let title = patch
            .title
            .required(TopicValidationError::EmptyTitle)?
            .map(|t| normalize_title(&t))
            .transpose()?;
        let preview = patch
            .preview
            .required(TopicValidationError::EmptyPreview)?
            .map(|p| normalize_preview(&p))
            .transpose()?;
        let description = patch
            .description
            .required(TopicValidationError::EmptyDescription)?
            .map(normalize_description)
            .transpose()?;
        let is_active = patch
            .is_active
            .required(TopicValidationError::NullField("isActive"))?;
        let order = patch.order.required(TopicValidationError::NullField("order"))?;

        let mut title_changed = false;
        if let Some(title) = title {
            if title != self.title {
                self.slug = derive_slug(&title);
                self.title = title;
                title_changed = true;
            }
        }

        match patch.icon {
            PatchField::Unset => {}
            PatchField::Null => self.icon = DEFAULT_TOPIC_ICON.to_string(),
            PatchField::Value(icon) => self.icon = normalize_icon(Some(icon)),
        }

        if let Some(preview) = preview {
            self.preview = preview;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(is_active) = is_active {
            self.is_active = is_active;
        }
        if let Some(order) = order {
            self.order = order;
        }

        self.updated_by = Some(acting);
        Ok(title_changed)
    }

    /// Appends a new entry with a parent-unique id and returns that id.
    pub fn append_question_answer(&mut self, draft: QuestionAnswerDraft) -> Uuid {
        let id = fresh_entry_id(&self.questions_answers);
        self.questions_answers.push(draft.into_entry(id));
        id
    }

    pub fn question_answer_mut(&mut self, qa_id: Uuid) -> Option<&mut QuestionAnswer> {
        self.questions_answers.iter_mut().find(|qa| qa.id == qa_id)
    }

    /// Removes the entry if present. Returns whether anything was removed.
    pub fn remove_question_answer(&mut self, qa_id: Uuid) -> bool {
        let before = self.questions_answers.len();
        self.questions_answers.retain(|qa| qa.id != qa_id);
        self.questions_answers.len() != before
    }
}
