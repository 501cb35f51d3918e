use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};

use crate::{
    error::{AppError, Result},
    AppState,
};

pub async fn get_image(
    State(state): State<AppState>,
    Path(image_filename): Path<String>,
) -> Result<impl IntoResponse> {
    let bytes = state
        .images
        .read(&image_filename)
        .await?
        .ok_or(AppError::NotFound("Image not found".to_string()))?;

    Ok(([(header::CONTENT_TYPE, content_type_for(&image_filename))], bytes))
}

fn content_type_for(filename: &str) -> &'static str {
    match filename.rsplit('.').next() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}
