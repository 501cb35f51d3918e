use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::{
    error::{AppError, Result},
    models::{ProductInput, ProductOut},
    queries::product_queries,
    AppState,
};

const MIN_PRICE: f64 = 0.01;
const ALLOWED_IMAGE_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<ProductInput>,
) -> Result<Json<ProductOut>> {
    if input.price < MIN_PRICE {
        return Err(AppError::BadRequest("Minimum price is 0.01".to_string()));
    }

    let product =
        product_queries::insert(&state.db, &input.name, &input.description, input.price).await?;

    Ok(Json(product.into()))
}

pub async fn upload_image(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    mut multipart: Multipart,
) -> Result<Json<Value>> {
    let field = loop {
        let field = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        match field {
            Some(field) if field.name() == Some("file") => break field,
            Some(_) => continue,
            None => return Err(AppError::BadRequest("Missing file field".to_string())),
        }
    };

    let content_type = field.content_type().unwrap_or_default().to_string();
    if !ALLOWED_IMAGE_TYPES.contains(&content_type.as_str()) {
        return Err(AppError::BadRequest("Invalid image format".to_string()));
    }

    if product_queries::find_by_id(&state.db, product_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    // Extension is the part of the client filename after the last '.'.
    let original_name = field.file_name().unwrap_or_default().to_string();
    let extension = original_name
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_string();

    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let filename = state.images.store(&bytes, &extension).await?;

    product_queries::set_image(&state.db, product_id, &filename)
        .await?
        .ok_or(AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(json!({ "filename": filename })))
}

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<ProductOut>>> {
    let products = product_queries::list_all(&state.db).await?;

    Ok(Json(products.into_iter().map(ProductOut::from).collect()))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<Json<ProductOut>> {
    let product = product_queries::find_by_id(&state.db, product_id)
        .await?
        .ok_or(AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(product.into()))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    Json(input): Json<ProductInput>,
) -> Result<Json<ProductOut>> {
    let product = product_queries::update(
        &state.db,
        product_id,
        &input.name,
        &input.description,
        input.price,
    )
    .await?
    .ok_or(AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(product.into()))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<Json<Value>> {
    let image_filename = product_queries::delete(&state.db, product_id)
        .await?
        .ok_or(AppError::NotFound("Product not found".to_string()))?;

    if let Some(filename) = image_filename {
        state.images.delete(&filename).await?;
    }

    Ok(Json(json!({ "detail": "Product deleted" })))
}
