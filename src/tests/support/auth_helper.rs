use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

pub fn create_test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_only_0000".to_string(),
        issuer: "ShunyaMarg".to_string(),
        access_token_expiry: 3600,
    })
}

/// Accepts any bearer value and reports the configured identity.
#[derive(Debug, Clone)]
pub struct StubTokenProvider {
    claims: Option<TokenClaims>,
}

impl StubTokenProvider {
    fn with_role(user_id: Uuid, role: UserRole) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            claims: Some(TokenClaims {
                sub: user_id,
                exp: now + 3600,
                iat: now,
                nbf: now,
                iss: "ShunyaMarg".to_string(),
                token_type: "access".to_string(),
                is_verified: true,
                role,
            }),
        }
    }

    pub fn admin(user_id: Uuid) -> Self {
        Self::with_role(user_id, UserRole::Admin)
    }

    pub fn user(user_id: Uuid) -> Self {
        Self::with_role(user_id, UserRole::User)
    }

    pub fn rejecting() -> Self {
        Self { claims: None }
    }

    pub fn unverified(mut self) -> Self {
        if let Some(claims) = self.claims.as_mut() {
            claims.is_verified = false;
        }
        self
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(
        &self,
        _user_id: Uuid,
        _is_verified: bool,
        _role: UserRole,
    ) -> Result<String, TokenError> {
        Ok("stub-token".to_string())
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        self.claims.clone().ok_or(TokenError::MalformedToken)
    }
}

pub fn token_provider_data(
    provider: impl TokenProvider + 'static,
) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(provider);
    web::Data::new(provider)
}

/// `Authorization` header value for a verified admin signed by `service`.
pub fn admin_bearer(service: &JwtTokenService, user_id: Uuid) -> String {
    let token = service
        .generate_access_token(user_id, true, UserRole::Admin)
        .expect("test token should encode");
    format!("Bearer {token}")
}
