use actix_web::{put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::topic::application::domain::entities::PatchQuestionAnswerData;
use crate::topic::application::ports::incoming::use_cases::UpdateQuestionAnswerCommand;
use crate::AppState;

use super::dto::TopicResponse;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQuestionAnswerRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub question: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub answer: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub order: PatchField<i32>,
}

impl From<UpdateQuestionAnswerRequest> for PatchQuestionAnswerData {
    fn from(req: UpdateQuestionAnswerRequest) -> Self {
        PatchQuestionAnswerData {
            question: req.question,
            answer: req.answer,
            order: req.order,
        }
    }
}

/// Update a Q&A entry
#[utoipa::path(
    put,
    path = "/api/topics/{id}/qa/{qa_id}",
    tag = "topics",
    params(
        ("id" = Uuid, Path, description = "Topic id"),
        ("qa_id" = Uuid, Path, description = "Q&A entry id")
    ),
    request_body = UpdateQuestionAnswerRequest,
    responses(
        (status = 200, description = "Entry updated", body = inline(SuccessResponse<TopicResponse>)),
        (status = 400, description = "Empty question or answer", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Topic or entry not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/topics/{id}/qa/{qa_id}")]
pub async fn update_question_answer_handler(
    admin: AdminUser,
    path: web::Path<(Uuid, Uuid)>,
    req: web::Json<UpdateQuestionAnswerRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (topic_id, qa_id) = path.into_inner();
    let command = UpdateQuestionAnswerCommand {
        topic_id,
        qa_id,
        updated_by: admin.acting_user(),
        patch: req.into_inner().into(),
    };

    match data.topic.update_question_answer.execute(command).await {
        Ok(topic) => ApiResponse::success(TopicResponse::from(topic)),
        Err(e) => ApiResponse::from_error(&e),
    }
}
