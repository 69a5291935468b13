use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::topic::application::domain::list_query::{TopicListParams, TopicProjection};
use crate::AppState;

use super::dto::TopicListResponse;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListTopicsQuery {
    /// Case-insensitive substring over title, preview and description
    pub search: Option<String>,
    /// Defaults to `true`
    pub active: Option<bool>,
    /// Include each topic's Q&A collection
    #[serde(default)]
    pub include_qa: bool,
}

impl From<ListTopicsQuery> for TopicListParams {
    fn from(query: ListTopicsQuery) -> Self {
        TopicListParams {
            search: query.search,
            active: query.active,
            projection: if query.include_qa {
                TopicProjection::Full
            } else {
                TopicProjection::Summary
            },
        }
    }
}

/// List topics
///
/// Public listing sorted by `order` ascending, newest first within equal order.
#[utoipa::path(
    get,
    path = "/api/topics",
    tag = "topics",
    params(ListTopicsQuery),
    responses(
        (status = 200, description = "Topics found", body = inline(SuccessResponse<TopicListResponse>)),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/topics")]
pub async fn list_topics_handler(
    query: web::Query<ListTopicsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.topic.list.execute(query.into_inner().into()).await {
        Ok(list) => ApiResponse::success(TopicListResponse::from(list)),
        Err(e) => ApiResponse::from_error(&e),
    }
}
