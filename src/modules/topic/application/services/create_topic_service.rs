use async_trait::async_trait;

use crate::topic::application::domain::{
    entities::{build_question_answers, Topic},
    slug::derive_slug,
};
use crate::topic::application::ports::{
    incoming::use_cases::{CreateTopicCommand, CreateTopicError, CreateTopicUseCase},
    outgoing::{NewTopicData, TopicRepository},
};

#[derive(Debug, Clone)]
pub struct CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateTopicUseCase for CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, command: CreateTopicCommand) -> Result<Topic, CreateTopicError> {
        let data = NewTopicData {
            title: command.title().to_string(),
            icon: command.icon().to_string(),
            preview: command.preview().to_string(),
            description: command.description().to_string(),
            slug: derive_slug(command.title()),
            is_active: command.is_active(),
            order: command.order(),
            created_by: command.created_by(),
            questions_answers: build_question_answers(command.into_question_answers()),
        };

        let topic = self.repository.insert_topic(data).await.map_err(|e| {
            if e.is_duplicate() {
                CreateTopicError::TopicAlreadyExists
            } else {
                tracing::error!(error = %e, "Failed to create topic");
                CreateTopicError::RepositoryError(e.to_string())
            }
        })?;

        tracing::info!(topic_id = %topic.id, slug = %topic.slug, "Topic created");
        Ok(topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    use crate::auth::application::domain::entities::UserId;
    use crate::tests::support::topic_store::{sample_topic, InMemoryTopicStore};
    use crate::topic::application::domain::entities::DEFAULT_TOPIC_ICON;
    use crate::topic::application::ports::incoming::use_cases::{
        CreateTopicInput, QuestionAnswerInput,
    };
    use crate::topic::application::ports::outgoing::TopicRepositoryError;

    fn command(title: &str) -> CreateTopicCommand {
        CreateTopicCommand::new(
            UserId::from(Uuid::new_v4()),
            CreateTopicInput {
                title: title.to_string(),
                icon: None,
                preview: "Preview".to_string(),
                description: "Description".to_string(),
                questions_answers: vec![
                    QuestionAnswerInput {
                        question: "First?".to_string(),
                        answer: "One".to_string(),
                        order: Some(1),
                    },
                    QuestionAnswerInput {
                        question: "Second?".to_string(),
                        answer: "Two".to_string(),
                        order: None,
                    },
                ],
                is_active: None,
                order: None,
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn create_topic_derives_slug_and_defaults() {
        let store = InMemoryTopicStore::default();
        let service = CreateTopicService::new(store.clone());
        let cmd = command("My Topic");
        let creator = cmd.created_by();

        let topic = service.execute(cmd).await.unwrap();

        assert_eq!(topic.slug, "my-topic");
        assert_eq!(topic.icon, DEFAULT_TOPIC_ICON);
        assert!(topic.is_active);
        assert_eq!(topic.order, 0);
        assert_eq!(topic.created_by, Some(creator));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn create_topic_assigns_distinct_entry_ids() {
        let service = CreateTopicService::new(InMemoryTopicStore::default());

        let topic = service.execute(command("With Entries")).await.unwrap();

        assert_eq!(topic.questions_answers.len(), 2);
        assert_ne!(topic.questions_answers[0].id, topic.questions_answers[1].id);
        assert_eq!(topic.questions_answers[0].order, 1);
        assert_eq!(topic.questions_answers[1].order, 0);
    }

    #[tokio::test]
    async fn duplicate_title_is_conflict() {
        let store = InMemoryTopicStore::with_topics(vec![sample_topic("My Topic")]);
        let service = CreateTopicService::new(store.clone());

        let result = service.execute(command("My Topic")).await;

        assert!(matches!(result, Err(CreateTopicError::TopicAlreadyExists)));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn colliding_slug_is_conflict() {
        let store = InMemoryTopicStore::with_topics(vec![sample_topic("A B")]);
        let service = CreateTopicService::new(store);

        let result = service.execute(command("A!! B")).await;

        assert!(matches!(result, Err(CreateTopicError::TopicAlreadyExists)));
    }

    #[tokio::test]
    async fn repository_error_is_mapped() {
        let store = InMemoryTopicStore::default();
        store.fail_writes_with(TopicRepositoryError::DatabaseError("connection lost".into()));
        let service = CreateTopicService::new(store);

        let result = service.execute(command("Rust")).await;

        match result {
            Err(CreateTopicError::RepositoryError(msg)) => assert!(msg.contains("connection lost")),
            other => panic!("Expected RepositoryError, got {:?}", other),
        }
    }
}
