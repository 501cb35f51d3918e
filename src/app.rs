use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    Router,
};
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;

use crate::{config::AppConfig, database, error::Result, routes, storage::ImageStore};

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub images: ImageStore,
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let pool = database::create_pool(&config.database).await?;
    let images = ImageStore::open(&config.storage.upload_dir)?;
    let state = AppState { db: pool, images };

    let cors = if config.cors.allowed_origins.is_empty() {
        CorsLayer::permissive()
    } else {
        let allowed_origins: Vec<HeaderValue> = config
            .cors
            .allowed_origins
            .iter()
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|_| {
                    crate::error::AppError::ConfigError(format!("Invalid CORS origin: {}", origin))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        CorsLayer::new()
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([http::header::CONTENT_TYPE])
            .allow_origin(allowed_origins)
    };

    let app = routes::create_router()
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors)
        .with_state(state);

    Ok(app)
}
