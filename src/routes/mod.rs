mod health;
mod images;
mod products;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route(
            "/products/",
            post(products::create_product).get(products::list_products),
        )
        .route(
            "/products/{product_id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route(
            "/products/{product_id}/upload-image",
            post(products::upload_image),
        )
        .route("/images/{image_filename}", get(images::get_image))
}
