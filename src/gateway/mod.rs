//! Catalog Gateway
//!
//! Consumed interface to the remote catalog service, organized like the
//! other remote bindings: the trait is the seam, `http` the REST transport.

mod http;

use crate::error::GatewayError;
use crate::models::{Product, ProductInput};
use async_trait::async_trait;

pub use http::HttpCatalogGateway;

/// Remote CRUD surface for products.
///
/// Futures are not `Send`; everything runs on the browser event loop.
#[async_trait(?Send)]
pub trait CatalogGateway {
    async fn list(&self) -> Result<Vec<Product>, GatewayError>;
    async fn create(&self, input: &ProductInput) -> Result<Product, GatewayError>;
    async fn update(&self, id: &str, input: &ProductInput) -> Result<Product, GatewayError>;
    async fn delete(&self, id: &str) -> Result<(), GatewayError>;
}
