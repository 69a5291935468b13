use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::topic::application::domain::{
    entities::{QuestionAnswer, Topic, DEFAULT_TOPIC_ICON},
    list_query::TopicListCriteria,
    slug::derive_slug,
};
use crate::topic::application::ports::outgoing::{
    NewTopicData, TopicQuery, TopicQueryError, TopicRepository, TopicRepositoryError,
};

/// Topic with one Q&A entry, active, `order` 0, created now.
pub fn sample_topic(title: &str) -> Topic {
    let now = Utc::now();
    Topic {
        id: Uuid::new_v4(),
        title: title.to_string(),
        icon: DEFAULT_TOPIC_ICON.to_string(),
        preview: format!("{title} preview"),
        description: format!("{title} description"),
        slug: derive_slug(title),
        questions_answers: vec![QuestionAnswer {
            id: Uuid::new_v4(),
            question: "What is it about?".to_string(),
            answer: "Many things.".to_string(),
            order: 0,
        }],
        is_active: true,
        order: 0,
        created_by: None,
        updated_by: None,
        created_at: now,
        updated_at: now,
    }
}

#[derive(Default)]
struct StoreState {
    topics: Vec<Topic>,
    query_failure: Option<TopicQueryError>,
    write_failure: Option<TopicRepositoryError>,
}

/// Shared in-memory double for both topic ports. Enforces title and slug uniqueness
/// the way the unique indexes do.
#[derive(Clone, Default)]
pub struct InMemoryTopicStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryTopicStore {
    pub fn with_topics(topics: Vec<Topic>) -> Self {
        let store = Self::default();
        store.state.lock().unwrap().topics = topics;
        store
    }

    pub fn fail_queries_with(&self, error: TopicQueryError) {
        self.state.lock().unwrap().query_failure = Some(error);
    }

    pub fn fail_writes_with(&self, error: TopicRepositoryError) {
        self.state.lock().unwrap().write_failure = Some(error);
    }

    pub fn get(&self, topic_id: Uuid) -> Option<Topic> {
        self.state
            .lock()
            .unwrap()
            .topics
            .iter()
            .find(|t| t.id == topic_id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().topics.len()
    }
}

fn check_unique(
    topics: &[Topic],
    skip_id: Option<Uuid>,
    title: &str,
    slug: &str,
) -> Result<(), TopicRepositoryError> {
    let others = topics.iter().filter(|t| Some(t.id) != skip_id);
    for other in others {
        if other.title == title {
            return Err(TopicRepositoryError::TitleAlreadyExists);
        }
        if other.slug == slug {
            return Err(TopicRepositoryError::SlugAlreadyExists);
        }
    }
    Ok(())
}

#[async_trait]
impl TopicQuery for InMemoryTopicStore {
    async fn list_topics(&self, criteria: &TopicListCriteria) -> Result<Vec<Topic>, TopicQueryError> {
        let state = self.state.lock().unwrap();
        if let Some(err) = &state.query_failure {
            return Err(err.clone());
        }

        let mut topics: Vec<Topic> = state
            .topics
            .iter()
            .filter(|t| criteria.matches(t))
            .cloned()
            .collect();
        topics.sort_by(TopicListCriteria::compare);
        Ok(topics)
    }

    async fn find_by_id(&self, topic_id: Uuid) -> Result<Option<Topic>, TopicQueryError> {
        let state = self.state.lock().unwrap();
        if let Some(err) = &state.query_failure {
            return Err(err.clone());
        }
        Ok(state.topics.iter().find(|t| t.id == topic_id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Topic>, TopicQueryError> {
        let state = self.state.lock().unwrap();
        if let Some(err) = &state.query_failure {
            return Err(err.clone());
        }
        Ok(state.topics.iter().find(|t| t.slug == slug).cloned())
    }
}

#[async_trait]
impl TopicRepository for InMemoryTopicStore {
    async fn insert_topic(&self, data: NewTopicData) -> Result<Topic, TopicRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(err) = &state.write_failure {
            return Err(err.clone());
        }
        check_unique(&state.topics, None, &data.title, &data.slug)?;

        let now = Utc::now();
        let topic = Topic {
            id: Uuid::new_v4(),
            title: data.title,
            icon: data.icon,
            preview: data.preview,
            description: data.description,
            slug: data.slug,
            questions_answers: data.questions_answers,
            is_active: data.is_active,
            order: data.order,
            created_by: Some(data.created_by),
            updated_by: None,
            created_at: now,
            updated_at: now,
        };
        state.topics.push(topic.clone());
        Ok(topic)
    }

    async fn replace_topic(&self, topic: &Topic) -> Result<Topic, TopicRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(err) = &state.write_failure {
            return Err(err.clone());
        }
        check_unique(&state.topics, Some(topic.id), &topic.title, &topic.slug)?;

        let stored = state
            .topics
            .iter_mut()
            .find(|t| t.id == topic.id)
            .ok_or(TopicRepositoryError::NotFound)?;

        let created_at = stored.created_at;
        let created_by = stored.created_by;
        *stored = Topic {
            created_at,
            created_by,
            updated_at: Utc::now(),
            ..topic.clone()
        };
        Ok(stored.clone())
    }

    async fn delete_topic(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(err) = &state.write_failure {
            return Err(err.clone());
        }

        let before = state.topics.len();
        state.topics.retain(|t| t.id != topic_id);
        if state.topics.len() == before {
            return Err(TopicRepositoryError::NotFound);
        }
        Ok(())
    }
}
