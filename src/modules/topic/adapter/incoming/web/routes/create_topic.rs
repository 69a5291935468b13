use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicCommand, CreateTopicInput, QuestionAnswerInput,
};
use crate::AppState;

use super::dto::TopicResponse;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionAnswerRequest {
    pub question: String,
    pub answer: String,
    pub order: Option<i32>,
}

impl From<QuestionAnswerRequest> for QuestionAnswerInput {
    fn from(req: QuestionAnswerRequest) -> Self {
        QuestionAnswerInput {
            question: req.question,
            answer: req.answer,
            order: req.order,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTopicRequest {
    pub title: String,
    pub icon: Option<String>,
    pub preview: String,
    pub description: String,
    #[serde(default)]
    pub questions_answers: Vec<QuestionAnswerRequest>,
    pub is_active: Option<bool>,
    pub order: Option<i32>,
}

impl From<CreateTopicRequest> for CreateTopicInput {
    fn from(req: CreateTopicRequest) -> Self {
        CreateTopicInput {
            title: req.title,
            icon: req.icon,
            preview: req.preview,
            description: req.description,
            questions_answers: req
                .questions_answers
                .into_iter()
                .map(QuestionAnswerInput::from)
                .collect(),
            is_active: req.is_active,
            order: req.order,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Create a topic
///
/// The slug is derived from the title. Requires an admin token.
#[utoipa::path(
    post,
    path = "/api/topics",
    tag = "topics",
    request_body = CreateTopicRequest,
    responses(
        (status = 201, description = "Topic created", body = inline(SuccessResponse<TopicResponse>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (
            status = 409,
            description = "Duplicate title",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "TOPIC_ALREADY_EXISTS",
                    "message": "A topic with this title already exists"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/topics")]
pub async fn create_topic_handler(
    admin: AdminUser,
    req: web::Json<CreateTopicRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateTopicCommand::new(admin.acting_user(), req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::from_error(&e),
    };

    match data.topic.create.execute(command).await {
        Ok(topic) => ApiResponse::created(TopicResponse::from(topic)),
        Err(e) => ApiResponse::from_error(&e),
    }
}
