use sqlx::SqlitePool;

use crate::{error::Result, models::Product};

/// Insert a new product with no image attached.
pub async fn insert(
    pool: &SqlitePool,
    name: &str,
    description: &str,
    price: f64,
) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO products (name, description, price, image_filename)
         VALUES (?, ?, ?, NULL)
         RETURNING *",
    )
    .bind(name)
    .bind(description)
    .bind(price)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

/// Find product by ID
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

/// Get all products (no ordering guarantee)
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>("SELECT * FROM products")
        .fetch_all(pool)
        .await?;

    Ok(products)
}

/// Replace name, description and price. Leaves image_filename untouched.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    name: &str,
    description: &str,
    price: f64,
) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "UPDATE products SET name = ?, description = ?, price = ?
         WHERE id = ?
         RETURNING *",
    )
    .bind(name)
    .bind(description)
    .bind(price)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

/// Attach a stored image filename to a product.
pub async fn set_image(
    pool: &SqlitePool,
    id: i64,
    filename: &str,
) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "UPDATE products SET image_filename = ?
         WHERE id = ?
         RETURNING *",
    )
    .bind(filename)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

/// Delete a product row. Returns the image filename that was attached so the
/// caller can remove the blob; outer None means no such product.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<Option<Option<String>>> {
    let product = find_by_id(pool, id).await?;

    let Some(product) = product else {
        return Ok(None);
    };

    sqlx::query("DELETE FROM products WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(Some(product.image_filename))
}
