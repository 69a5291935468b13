use actix_web::{put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::topic::application::domain::entities::PatchTopicData;
use crate::topic::application::ports::incoming::use_cases::UpdateTopicCommand;
use crate::AppState;

use super::dto::TopicResponse;

/// Omitted fields keep their stored value. `icon: null` restores the default icon;
/// `null` on any other field is rejected.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTopicRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub title: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub icon: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub preview: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<bool>)]
    pub is_active: PatchField<bool>,

    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub order: PatchField<i32>,
}

impl From<UpdateTopicRequest> for PatchTopicData {
    fn from(req: UpdateTopicRequest) -> Self {
        PatchTopicData {
            title: req.title,
            icon: req.icon,
            preview: req.preview,
            description: req.description,
            is_active: req.is_active,
            order: req.order,
        }
    }
}

/// Update a topic
///
/// Partial merge. Changing the title regenerates the slug.
#[utoipa::path(
    put,
    path = "/api/topics/{id}",
    tag = "topics",
    params(("id" = Uuid, Path, description = "Topic id")),
    request_body = UpdateTopicRequest,
    responses(
        (status = 200, description = "Topic updated", body = inline(SuccessResponse<TopicResponse>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 409, description = "Duplicate title", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/topics/{id}")]
pub async fn update_topic_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateTopicRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = UpdateTopicCommand {
        topic_id: path.into_inner(),
        updated_by: admin.acting_user(),
        patch: req.into_inner().into(),
    };

    match data.topic.update.execute(command).await {
        Ok(topic) => ApiResponse::success(TopicResponse::from(topic)),
        Err(e) => ApiResponse::from_error(&e),
    }
}
