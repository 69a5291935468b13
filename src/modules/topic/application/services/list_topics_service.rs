use async_trait::async_trait;

use crate::topic::application::domain::list_query::{
    TopicListCriteria, TopicListParams, TopicView,
};
use crate::topic::application::ports::{
    incoming::use_cases::{ListTopicsError, ListTopicsUseCase, TopicList},
    outgoing::TopicQuery,
};

#[derive(Debug, Clone)]
pub struct ListTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListTopicsUseCase for ListTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self, params: TopicListParams) -> Result<TopicList, ListTopicsError> {
        let criteria = TopicListCriteria::build(params.search.as_deref(), params.active);

        let topics = self.query.list_topics(&criteria).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to list topics");
            ListTopicsError::RepositoryError(e.to_string())
        })?;

        let items: Vec<TopicView> = topics
            .into_iter()
            .map(|topic| TopicView::project(topic, params.projection))
            .collect();

        Ok(TopicList {
            count: items.len(),
            items,
        })
    }
}
