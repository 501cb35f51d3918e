use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_filename: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
}

#[derive(Debug, Serialize)]
pub struct ProductOut {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: Option<String>,
}

impl From<Product> for ProductOut {
    fn from(product: Product) -> Self {
        let image_url = product
            .image_filename
            .map(|filename| format!("/images/{}", filename));

        ProductOut {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(image_filename: Option<&str>) -> Product {
        Product {
            id: 1,
            name: "Mug".to_string(),
            description: "Ceramic mug".to_string(),
            price: 9.99,
            image_filename: image_filename.map(String::from),
        }
    }

    #[test]
    fn image_url_absent_without_filename() {
        let out = ProductOut::from(product(None));
        assert_eq!(out.image_url, None);
    }

    #[test]
    fn image_url_derived_from_filename() {
        let out = ProductOut::from(product(Some("abc.jpg")));
        assert_eq!(out.image_url.as_deref(), Some("/images/abc.jpg"));
    }
}
