use actix_cors::Cors;
use actix_web::http::{header, Uri};
use std::env;

pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CorsConfigError {
    #[error("FRONTEND_URL must be an absolute http(s) origin, got {0:?}")]
    InvalidOrigin(String),
}

/// The single browser origin allowed to call the API, from `FRONTEND_URL`.
pub fn frontend_origin_from_env() -> Result<String, CorsConfigError> {
    let raw = env::var("FRONTEND_URL").unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string());
    parse_origin(&raw)
}

fn parse_origin(raw: &str) -> Result<String, CorsConfigError> {
    let origin = raw.trim().trim_end_matches('/');

    let valid = origin
        .parse::<Uri>()
        .map(|uri| {
            matches!(uri.scheme_str(), Some("http") | Some("https"))
                && uri.host().is_some()
                && uri.path_and_query().map_or(true, |pq| pq.as_str() == "/")
        })
        .unwrap_or(false);

    if valid {
        Ok(origin.to_string())
    } else {
        Err(CorsConfigError::InvalidOrigin(raw.to_string()))
    }
}

/// Credentialed CORS for one origin. Other origins get no CORS headers.
pub fn frontend_cors(origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(origin)
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .supports_credentials()
        .max_age(3600)
}
