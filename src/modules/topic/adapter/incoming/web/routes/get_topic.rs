use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::dto::TopicResponse;

/// Get a topic by id or slug
///
/// The identifier is tried as a topic id first, then as a slug.
#[utoipa::path(
    get,
    path = "/api/topics/{identifier}",
    tag = "topics",
    params(
        ("identifier" = String, Path, description = "Topic id or slug")
    ),
    responses(
        (status = 200, description = "Topic found", body = inline(SuccessResponse<TopicResponse>)),
        (
            status = 404,
            description = "Topic not found",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "TOPIC_NOT_FOUND", "message": "Topic not found" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/topics/{identifier}")]
pub async fn get_topic_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let identifier = path.into_inner();

    match data.topic.get.execute(&identifier).await {
        Ok(topic) => ApiResponse::success(TopicResponse::from(topic)),
        Err(e) => ApiResponse::from_error(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubGetTopicUseCase;
    use crate::tests::support::topic_store::{sample_topic, InMemoryTopicStore};

    async fn get_json(state: web::Data<AppState>, uri: &str) -> (StatusCode, Value) {
        let app = test::init_service(App::new().app_data(state).service(get_topic_handler)).await;
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_get_by_id_includes_questions_answers() {
        let topic = sample_topic("My Topic");
        let state =
            TestAppStateBuilder::with_store(InMemoryTopicStore::with_topics(vec![topic.clone()]))
                .build();

        let (status, body) = get_json(state, &format!("/api/topics/{}", topic.id)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["id"], topic.id.to_string());
        assert_eq!(body["data"]["questionsAnswers"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_get_by_slug() {
        let topic = sample_topic("My Topic");
        let state =
            TestAppStateBuilder::with_store(InMemoryTopicStore::with_topics(vec![topic.clone()]))
                .build();

        let (status, body) = get_json(state, "/api/topics/my-topic").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["slug"], "my-topic");
        assert_eq!(body["data"]["title"], "My Topic");
    }

    #[actix_web::test]
    async fn test_get_unknown_is_not_found() {
        let state = TestAppStateBuilder::default().build();

        let (status, body) = get_json(state, "/api/topics/nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "TOPIC_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_get_serializes_camel_case() {
        let topic = sample_topic("Camel");
        let state = TestAppStateBuilder::default()
            .with_get_topic(StubGetTopicUseCase::found(topic))
            .build();

        let (_, body) = get_json(state, "/api/topics/anything").await;

        let data = &body["data"];
        assert!(data.get("isActive").is_some());
        assert!(data.get("createdAt").is_some());
        assert!(data.get("is_active").is_none());
    }

    #[actix_web::test]
    async fn test_get_store_failure_is_internal_error() {
        let state = TestAppStateBuilder::default()
            .with_get_topic(StubGetTopicUseCase::failure("db down"))
            .build();

        let (status, body) = get_json(state, "/api/topics/anything").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
