use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::dto::TopicResponse;

/// Delete a Q&A entry
///
/// Deleting an entry that is already gone succeeds and returns the topic unchanged.
#[utoipa::path(
    delete,
    path = "/api/topics/{id}/qa/{qa_id}",
    tag = "topics",
    params(
        ("id" = Uuid, Path, description = "Topic id"),
        ("qa_id" = Uuid, Path, description = "Q&A entry id")
    ),
    responses(
        (status = 200, description = "Entry removed", body = inline(SuccessResponse<TopicResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/topics/{id}/qa/{qa_id}")]
pub async fn delete_question_answer_handler(
    admin: AdminUser,
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (topic_id, qa_id) = path.into_inner();

    match data
        .topic
        .delete_question_answer
        .execute(topic_id, qa_id, admin.acting_user())
        .await
    {
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
    use crate::tests::support::auth_helper::{token_provider_data, StubTokenProvider};
    use crate::tests::support::topic_store::{sample_topic, InMemoryTopicStore};

    async fn delete_qa(store: InMemoryTopicStore, topic_id: Uuid, qa_id: Uuid) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::with_store(store).build())
                .app_data(token_provider_data(StubTokenProvider::admin(Uuid::new_v4())))
                .service(delete_question_answer_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/topics/{topic_id}/qa/{qa_id}"))
            .insert_header(("Authorization", "Bearer token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_delete_question_answer_removes_entry() {
        let topic = sample_topic("Vedanta");
        let qa_id = topic.questions_answers[0].id;
        let store = InMemoryTopicStore::with_topics(vec![topic.clone()]);

        let (status, body) = delete_qa(store.clone(), topic.id, qa_id).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["questionsAnswers"].as_array().unwrap().len(), 0);
        assert!(store.get(topic.id).unwrap().questions_answers.is_empty());
    }

    #[actix_web::test]
    async fn test_delete_missing_entry_is_noop() {
        let topic = sample_topic("Vedanta");
        let store = InMemoryTopicStore::with_topics(vec![topic.clone()]);

        let (status, body) = delete_qa(store.clone(), topic.id, Uuid::new_v4()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["questionsAnswers"].as_array().unwrap().len(), 1);
        assert_eq!(store.get(topic.id).unwrap().questions_answers.len(), 1);
    }

    #[actix_web::test]
    async fn test_delete_entry_of_unknown_topic() {
        let (status, body) = delete_qa(InMemoryTopicStore::default(), Uuid::new_v4(), Uuid::new_v4()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "TOPIC_NOT_FOUND");
    }
}
