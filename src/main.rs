pub mod api;
pub mod health;
pub mod modules;
pub mod seed;
pub mod shared;

pub use modules::auth;
pub use modules::topic;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::{custom_json_config, frontend_cors, frontend_origin_from_env};
use crate::topic::adapter::outgoing::{TopicQueryPostgres, TopicRepositoryPostgres};
use crate::topic::application::topic_use_cases::TopicUseCases;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub topic: TopicUseCases,
}

fn required_env(key: &str) -> std::io::Result<String> {
    env::var(key).map_err(|_| {
        tracing::error!(key, "Required environment variable is not set");
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{key} is not set"),
        )
    })
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = required_env("DATABASE_URL")?;

    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to connect to database");
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string())
    })?;
    let db_arc = Arc::new(conn);

    let topic = TopicUseCases::wire(
        TopicQueryPostgres::new(Arc::clone(&db_arc)),
        TopicRepositoryPostgres::new(Arc::clone(&db_arc)),
    );

    if env::args().nth(1).as_deref() == Some("seed") {
        let report = seed::run(&topic).await;
        info!(
            created = report.created,
            skipped = report.skipped,
            failed = report.failed,
            "Seeding finished"
        );
        return Ok(());
    }

    let jwt_config = JwtConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "Invalid JWT configuration");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));

    let frontend_origin = frontend_origin_from_env().map_err(|e| {
        tracing::error!(error = %e, "Invalid CORS configuration");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;
    info!(%frontend_origin, "CORS origin configured");

    let host = required_env("HOST")?;
    let port = required_env("PORT")?;
    let server_url = format!("{host}:{port}");
    info!(%server_url, "Server listening");

    let state = AppState { topic };
    let openapi = ApiDoc::openapi();
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .wrap(frontend_cors(&frontend_origin))
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::topic::adapter::incoming::web::routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    cfg.service(crate::health::api_health);
    // Topics
    cfg.service(routes::list_topics_handler);
    cfg.service(routes::create_topic_handler);
    cfg.service(routes::add_question_answer_handler);
    cfg.service(routes::update_question_answer_handler);
    cfg.service(routes::delete_question_answer_handler);
    cfg.service(routes::get_topic_handler);
    cfg.service(routes::update_topic_handler);
    cfg.service(routes::delete_topic_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
