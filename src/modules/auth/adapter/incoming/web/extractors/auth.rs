use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// Represents an authenticated caller (verified or not)
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub is_verified: bool,
    pub role: UserRole,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider = match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        {
            Some(provider) => provider,
            None => {
                tracing::error!("TokenProvider missing from app data");
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match token_provider.verify_token(&token) {
            Ok(claims) => {
                if claims.token_type != "access" {
                    return ready(Err(create_api_error(ApiResponse::unauthorized(
                        "INVALID_TOKEN_TYPE",
                        "Invalid token type",
                    ))));
                }

                ready(Ok(AuthenticatedUser {
                    user_id: claims.sub,
                    is_verified: claims.is_verified,
                    role: claims.role,
                }))
            }
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

/// Privileged caller: verified account holding the admin role.
/// This is the gate in front of every content mutation.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_id: Uuid,
}

impl AdminUser {
    /// Acting identity handed to create/update commands.
    pub fn acting_user(&self) -> UserId {
        UserId::from(self.user_id)
    }
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let auth_user = match AuthenticatedUser::from_request(req, payload).into_inner() {
            Ok(user) => user,
            Err(e) => return ready(Err(e)),
        };

        if !auth_user.is_verified {
            return ready(Err(create_api_error(ApiResponse::forbidden(
                "EMAIL_NOT_VERIFIED",
                "Email verification required",
            ))));
        }

        if !auth_user.role.is_admin() {
            tracing::warn!(user_id = %auth_user.user_id, "Non-admin attempted a privileged operation");
            return ready(Err(create_api_error(ApiResponse::forbidden(
                "ADMIN_REQUIRED",
                "Administrator role required",
            ))));
        }

        ready(Ok(AdminUser {
            user_id: auth_user.user_id,
        }))
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, http::StatusCode, test, App, Responder};

    use crate::tests::support::auth_helper::{token_provider_data, StubTokenProvider};

    #[get("/admin-only")]
    async fn admin_only(user: AdminUser) -> impl Responder {
        ApiResponse::success(user.user_id.to_string())
    }

    async fn call(provider: StubTokenProvider, header: Option<&str>) -> (StatusCode, serde_json::Value) {
        let app = test::init_service(
            App::new()
                .app_data(token_provider_data(provider))
                .service(admin_only),
        )
        .await;

        let mut req = test::TestRequest::get().uri("/admin-only");
        if let Some(value) = header {
            req = req.insert_header(("Authorization", value));
        }

        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null))
    }

    #[actix_web::test]
    async fn admin_passes_gate() {
        let user_id = Uuid::new_v4();
        let (status, json) = call(StubTokenProvider::admin(user_id), Some("Bearer t")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"], user_id.to_string());
    }

    #[actix_web::test]
    async fn missing_header_is_unauthorized() {
        let (status, json) = call(StubTokenProvider::admin(Uuid::new_v4()), None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"]["code"], "MISSING_AUTH_HEADER");
    }

    #[actix_web::test]
    async fn invalid_token_is_unauthorized() {
        let (status, json) = call(StubTokenProvider::rejecting(), Some("Bearer bad")).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"]["code"], "INVALID_TOKEN");
    }

    #[actix_web::test]
    async fn regular_user_is_forbidden() {
        let (status, json) = call(StubTokenProvider::user(Uuid::new_v4()), Some("Bearer t")).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["error"]["code"], "ADMIN_REQUIRED");
    }

    #[actix_web::test]
    async fn unverified_admin_is_forbidden() {
        let provider = StubTokenProvider::admin(Uuid::new_v4()).unverified();
        let (status, json) = call(provider, Some("Bearer t")).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["error"]["code"], "EMAIL_NOT_VERIFIED");
    }
}
