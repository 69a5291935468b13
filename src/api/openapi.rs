use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::topic::adapter::incoming::web::routes::dto::{
    QuestionAnswerResponse, TopicListResponse, TopicResponse,
};
use crate::topic::adapter::incoming::web::routes::{
    AddQuestionAnswerRequest, CreateTopicRequest, QuestionAnswerRequest,
    UpdateQuestionAnswerRequest, UpdateTopicRequest,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ShunyaMarg Content API",
        version = "1.0.0",
        description = "Topics and their question/answer entries",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Public
        crate::topic::adapter::incoming::web::routes::list_topics_handler,
        crate::topic::adapter::incoming::web::routes::get_topic_handler,

        // Admin
        crate::topic::adapter::incoming::web::routes::create_topic_handler,
        crate::topic::adapter::incoming::web::routes::update_topic_handler,
        crate::topic::adapter::incoming::web::routes::delete_topic_handler,
        crate::topic::adapter::incoming::web::routes::add_question_answer_handler,
        crate::topic::adapter::incoming::web::routes::update_question_answer_handler,
        crate::topic::adapter::incoming::web::routes::delete_question_answer_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<TopicResponse>,
            SuccessResponse<TopicListResponse>,
            ErrorResponse,
            ErrorDetail,

            // Topic DTOs
            TopicResponse,
            TopicListResponse,
            QuestionAnswerResponse,
            CreateTopicRequest,
            QuestionAnswerRequest,
            UpdateTopicRequest,
            AddQuestionAnswerRequest,
            UpdateQuestionAnswerRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "topics", description = "Topic browsing and management endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Admin access token"))
                        .build(),
                ),
            )
        }
    }
}
