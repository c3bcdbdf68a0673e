//! REST Catalog Gateway
//!
//! Talks to `{base_url}/products` with JSON bodies. Non-success responses
//! yield the message from an `{"error": "..."}` body when present, else a
//! per-operation fallback; transport-reported timeouts map to
//! `GatewayError::Timeout`.

use super::CatalogGateway;
use crate::error::GatewayError;
use crate::models::{Product, ProductInput};
use async_trait::async_trait;
use serde::Deserialize;

pub struct HttpCatalogGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

fn transport_error(err: reqwest::Error, fallback: &str) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::Remote(fallback.to_string())
    }
}

/// Extract the gateway's error message from a non-success response
async fn response_error(response: reqwest::Response, fallback: &str) -> GatewayError {
    let message = match response.text().await {
        Ok(body) => serde_json::from_str::<ErrorBody>(&body).map(|b| b.error).ok(),
        Err(_) => None,
    };
    GatewayError::Remote(message.unwrap_or_else(|| fallback.to_string()))
}

#[async_trait(?Send)]
impl CatalogGateway for HttpCatalogGateway {
    async fn list(&self) -> Result<Vec<Product>, GatewayError> {
        const FALLBACK: &str = "Failed to fetch products";
        let response = self
            .client
            .get(self.url("/products"))
            .send()
            .await
            .map_err(|e| transport_error(e, FALLBACK))?;
        if !response.status().is_success() {
            return Err(response_error(response, FALLBACK).await);
        }
        response
            .json()
            .await
            .map_err(|e| transport_error(e, FALLBACK))
    }

    async fn create(&self, input: &ProductInput) -> Result<Product, GatewayError> {
        const FALLBACK: &str = "Failed to create product";
        let response = self
            .client
            .post(self.url("/products"))
            .json(input)
            .send()
            .await
            .map_err(|e| transport_error(e, FALLBACK))?;
        if !response.status().is_success() {
            return Err(response_error(response, FALLBACK).await);
        }
        response
            .json()
            .await
            .map_err(|e| transport_error(e, FALLBACK))
    }

    async fn update(&self, id: &str, input: &ProductInput) -> Result<Product, GatewayError> {
        let fallback = format!("Failed to update product with ID {id}");
        let response = self
            .client
            .put(self.url(&format!("/products/{id}")))
            .json(input)
            .send()
            .await
            .map_err(|e| transport_error(e, &fallback))?;
        if !response.status().is_success() {
            return Err(response_error(response, &fallback).await);
        }
        response
            .json()
            .await
            .map_err(|e| transport_error(e, &fallback))
    }

    async fn delete(&self, id: &str) -> Result<(), GatewayError> {
        let fallback = format!("Failed to delete product with ID {id}");
        let response = self
            .client
            .delete(self.url(&format!("/products/{id}")))
            .send()
            .await
            .map_err(|e| transport_error(e, &fallback))?;
        if !response.status().is_success() {
            return Err(response_error(response, &fallback).await);
        }
        Ok(())
    }
}
