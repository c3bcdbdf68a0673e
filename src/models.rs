//! Catalog Models
//!
//! Data structures matching the catalog gateway's wire format.

use serde::{Deserialize, Serialize};

/// Catalog entity (matches the gateway's camelCase wire format)
///
/// `id` is assigned by the gateway on create and immutable afterwards.
/// Responses from older gateway versions carry the image under `image`
/// instead of `imageUrl`; the alias accepts both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub sku: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "image", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Create/update payload sent to the gateway
///
/// The form field `image` has already been renamed to `imageUrl` and the
/// price parsed by the time this struct exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub title: String,
    pub sku: String,
    pub price: f64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_wire_format() {
        let json = r#"{"id":"42","title":"Widget","sku":"W-1","price":9.99,"description":"d","imageUrl":"http://x/y.png"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "42");
        assert_eq!(product.price, 9.99);
        assert_eq!(product.image_url.as_deref(), Some("http://x/y.png"));
    }

    #[test]
    fn test_legacy_image_field_accepted() {
        let json = r#"{"title":"Widget","sku":"W-1","price":1.0,"image":"http://x/legacy.png"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.image_url.as_deref(), Some("http://x/legacy.png"));
        // absent fields fall back to empty
        assert_eq!(product.id, "");
        assert_eq!(product.description, "");
    }

    #[test]
    fn test_input_serializes_image_as_image_url() {
        let input = ProductInput {
            title: "Widget".to_string(),
            sku: "W-1".to_string(),
            price: 9.99,
            description: "d".to_string(),
            image_url: Some("http://x/y.png".to_string()),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["imageUrl"], "http://x/y.png");
        assert!(json.get("image").is_none());
    }

    #[test]
    fn test_input_omits_absent_image() {
        let input = ProductInput {
            title: "Widget".to_string(),
            sku: "W-1".to_string(),
            price: 9.99,
            description: "d".to_string(),
            image_url: None,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("imageUrl").is_none());
    }
}
