use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

use super::jwt_config::JwtConfig;

const ACCESS_TOKEN_TYPE: &str = "access";

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(
        &self,
        user_id: Uuid,
        is_verified: bool,
        role: UserRole,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.access_token_expiry);

        let claims = TokenClaims {
            sub: user_id,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            iss: self.config.issuer.clone(),
            token_type: ACCESS_TOKEN_TYPE.to_string(),
            is_verified,
            role,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    _ => {
                        tracing::warn!(error = %e, "Token verification failed: malformed token");
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str) -> JwtConfig {
        JwtConfig {
            secret_key: secret.to_string(),
            issuer: "test_issuer".to_string(),
            access_token_expiry: 3600,
        }
    }

    fn service() -> JwtTokenService {
        JwtTokenService::new(config("FAKE_JWT_SECRET_DO_NOT_USE_IN_PROD_0000"))
    }

    #[test]
    fn test_generate_and_verify_admin_token() {
        let service = service();
        let user_id = Uuid::new_v4();

        let token = service
            .generate_access_token(user_id, true, UserRole::Admin)
            .expect("Token should be generated");

        let claims = service.verify_token(&token).expect("Token should be valid");
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.token_type, "access");
        assert!(claims.is_verified);
        assert_eq!(claims.role, UserRole::Admin);
    }

    #[test]
    fn test_regular_user_role_is_preserved() {
        let service = service();
        let token = service
            .generate_access_token(Uuid::new_v4(), false, UserRole::User)
            .unwrap();

        let claims = service.verify_token(&token).unwrap();
        assert_eq!(claims.role, UserRole::User);
        assert!(!claims.is_verified);
    }

    #[test]
    fn test_invalid_token_is_malformed() {
        let result = service().verify_token("invalid.jwt.token");
        assert!(matches!(result, Err(TokenError::MalformedToken)));
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let other = JwtTokenService::new(config("ANOTHER_SECRET_THAT_IS_LONG_ENOUGH_1234"));
        let token = other
            .generate_access_token(Uuid::new_v4(), true, UserRole::Admin)
            .unwrap();

        let result = service().verify_token(&token);
        assert!(matches!(result, Err(TokenError::InvalidSignature)));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = service();
        let past = Utc::now() - Duration::hours(2);
        let claims = TokenClaims {
            sub: Uuid::new_v4(),
            exp: (past + Duration::minutes(5)).timestamp(),
            iat: past.timestamp(),
            nbf: past.timestamp(),
            iss: "test_issuer".to_string(),
            token_type: "access".to_string(),
            is_verified: true,
            role: UserRole::Admin,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"FAKE_JWT_SECRET_DO_NOT_USE_IN_PROD_0000"),
        )
        .unwrap();

        let result = service.verify_token(&token);
        assert!(matches!(result, Err(TokenError::TokenExpired)));
    }
}
