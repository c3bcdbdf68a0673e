//! Product Form State
//!
//! Raw string form fields shared by the create and edit dialogs, plus the
//! local validation that runs before any gateway call.

use crate::models::{Product, ProductInput};

/// Per-field validation messages for the product form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub title: Option<String>,
    pub sku: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.sku.is_none()
            && self.price.is_none()
            && self.description.is_none()
    }
}

/// Raw form state as typed by the user
///
/// Field names mirror the dialog inputs; `image` is renamed to `imageUrl`
/// only when the validated payload is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub title: String,
    pub sku: String,
    pub price: String,
    pub description: String,
    pub image: String,
}

impl ProductForm {
    /// Pre-populate the form from an existing product (edit dialog)
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            sku: product.sku.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            image: product.image_url.clone().unwrap_or_default(),
        }
    }

    /// Validate the form and build the gateway payload.
    ///
    /// `title`, `sku`, `price` and `description` are required; `price` must
    /// parse as a number; `image` is optional and maps to `imageUrl`.
    pub fn validate(&self) -> Result<ProductInput, FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.title.trim().is_empty() {
            errors.title = Some("Title is required".to_string());
        }
        if self.sku.trim().is_empty() {
            errors.sku = Some("SKU is required".to_string());
        }
        let price = if self.price.trim().is_empty() {
            errors.price = Some("Price is required".to_string());
            None
        } else {
            match self.price.trim().parse::<f64>() {
                Ok(value) => Some(value),
                Err(_) => {
                    errors.price = Some("Price must be a number".to_string());
                    None
                }
            }
        };
        if self.description.trim().is_empty() {
            errors.description = Some("Description is required".to_string());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let image = self.image.trim();
        Ok(ProductInput {
            title: self.title.clone(),
            sku: self.sku.clone(),
            price: price.unwrap_or_default(),
            description: self.description.clone(),
            image_url: if image.is_empty() {
                None
            } else {
                Some(image.to_string())
            },
        })
    }
}
