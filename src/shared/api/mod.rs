mod cors;
mod json_config;
mod response;

pub use cors::{frontend_cors, frontend_origin_from_env, CorsConfigError};
pub use json_config::custom_json_config;
pub use response::{ApiError, ApiResponse};
