use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::topic::application::ports::incoming::use_cases::AddQuestionAnswerCommand;
use crate::AppState;

use super::dto::TopicResponse;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddQuestionAnswerRequest {
    pub question: String,
    pub answer: String,
    pub order: Option<i32>,
}

/// Add a Q&A entry to a topic
///
/// Returns the whole topic with the new entry appended.
#[utoipa::path(
    post,
    path = "/api/topics/{id}/qa",
    tag = "topics",
    params(("id" = Uuid, Path, description = "Topic id")),
    request_body = AddQuestionAnswerRequest,
    responses(
        (status = 201, description = "Entry added", body = inline(SuccessResponse<TopicResponse>)),
        (status = 400, description = "Empty question or answer", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/topics/{id}/qa")]
pub async fn add_question_answer_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<AddQuestionAnswerRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let command = match AddQuestionAnswerCommand::new(
        path.into_inner(),
        admin.acting_user(),
        req.question,
        req.answer,
        req.order,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::from_error(&e),
    };

    match data.topic.add_question_answer.execute(command).await {
        Ok(topic) => ApiResponse::created(TopicResponse::from(topic)),
        Err(e) => ApiResponse::from_error(&e),
    }
}
