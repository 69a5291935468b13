use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a topic
///
/// Removes the topic and all of its Q&A entries.
#[utoipa::path(
    delete,
    path = "/api/topics/{id}",
    tag = "topics",
    params(("id" = Uuid, Path, description = "Topic id")),
    responses(
        (status = 204, description = "Topic deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/topics/{id}")]
pub async fn delete_topic_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.topic.delete.execute(topic_id).await {
        Ok(()) => {
            tracing::info!(%topic_id, deleted_by = %admin.user_id, "Topic removed");
            ApiResponse::no_content()
        }
        Err(e) => ApiResponse::from_error(&e),
    }
}
