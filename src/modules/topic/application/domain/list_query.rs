use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

use super::entities::{QuestionAnswer, Topic};

/// Whether listed topics carry their Q&A collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopicProjection {
    #[default]
    Summary,
    Full,
}

/// Raw list inputs as received from a caller.
#[derive(Debug, Clone, Default)]
pub struct TopicListParams {
    pub search: Option<String>,
    pub active: Option<bool>,
    pub projection: TopicProjection,
}

//
// ──────────────────────────────────────────────────────────
// Criteria
// ──────────────────────────────────────────────────────────
//

/// Normalized list filter. Store adapters translate it into their own query
/// and must apply [`TopicListCriteria::compare`] ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicListCriteria {
    search: Option<String>,
    is_active: bool,
}

impl TopicListCriteria {
    /// Blank search text is dropped; otherwise the text is matched as given,
    /// surrounding whitespace included. A missing `active` flag means active only.
    pub fn build(search: Option<&str>, active: Option<bool>) -> Self {
        let search = search
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string);

        Self {
            search,
            is_active: active.unwrap_or(true),
        }
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// `ILIKE` pattern for the search text, with wildcard characters escaped.
    pub fn search_pattern(&self) -> Option<String> {
        self.search.as_deref().map(|text| {
            let mut pattern = String::with_capacity(text.len() + 2);
            pattern.push('%');
            for ch in text.chars() {
                if matches!(ch, '%' | '_' | '\\') {
                    pattern.push('\\');
                }
                pattern.push(ch);
            }
            pattern.push('%');
            pattern
        })
    }

    pub fn matches(&self, topic: &Topic) -> bool {
        if topic.is_active != self.is_active {
            return false;
        }

        match &self.search {
            None => true,
            Some(text) => {
                let needle = text.to_lowercase();
                [&topic.title, &topic.preview, &topic.description]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            }
        }
    }

    /// `order` ascending, then newest first. Id breaks remaining ties.
    pub fn compare(a: &Topic, b: &Topic) -> Ordering {
        a.order
            .cmp(&b.order)
            .then_with(|| b.created_at.cmp(&a.created_at))
            .then_with(|| a.id.cmp(&b.id))
    }
}

//
// ──────────────────────────────────────────────────────────
// Projected view
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct TopicView {
    pub id: Uuid,
    pub title: String,
    pub icon: String,
    pub preview: String,
    pub description: String,
    pub slug: String,
    pub questions_answers: Option<Vec<QuestionAnswer>>,
    pub is_active: bool,
    pub order: i32,
    pub created_by: Option<UserId>,
    pub updated_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TopicView {
    pub fn project(topic: Topic, projection: TopicProjection) -> Self {
        let questions_answers = match projection {
            TopicProjection::Summary => None,
            TopicProjection::Full => Some(topic.questions_answers),
        };

        Self {
            id: topic.id,
            title: topic.title,
            icon: topic.icon,
            preview: topic.preview,
            description: topic.description,
            slug: topic.slug,
            questions_answers,
            is_active: topic.is_active,
            order: topic.order,
            created_by: topic.created_by,
            updated_by: topic.updated_by,
            created_at: topic.created_at,
            updated_at: topic.updated_at,
        }
    }
}
