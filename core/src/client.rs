//! Stateless HTTP request builder and response parser for the catalog API.
//!
//! # Design
//! `ProductClient` holds only a `base_url` and carries no mutable state
//! between calls. Each CRUD operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. `ProductService` glues the two together over a
//! `Transport`.
//!
//! The `parse_*` methods never look at the status code. A 4xx/5xx response
//! whose body decodes as the expected type is returned like a success, and
//! one whose body does not decode (e.g. `{"error": "..."}` where a product
//! was expected) fails as `ApiError::Deserialization`. Delete discards the
//! response entirely. Callers that need to tell server errors apart must
//! inspect `HttpResponse::status` themselves before parsing.

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateProduct, Product, ProductId, UpdateProduct};

/// Synchronous, stateless client for the catalog API.
#[derive(Debug, Clone)]
pub struct ProductClient {
    base_url: String,
}

impl ProductClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_products(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_product(&self, id: &ProductId) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Get,
            path: self.item_url(id)?,
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn build_create_product(&self, input: &CreateProduct) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection_url(),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_update_product(
        &self,
        id: &ProductId,
        input: &UpdateProduct,
    ) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.item_url(id)?,
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_delete_product(&self, id: &ProductId) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_url(id)?,
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn parse_list_products(&self, response: HttpResponse) -> Result<Vec<Product>, ApiError> {
        from_json(&response.body)
    }

    pub fn parse_get_product(&self, response: HttpResponse) -> Result<Product, ApiError> {
        from_json(&response.body)
    }

    pub fn parse_create_product(&self, response: HttpResponse) -> Result<Product, ApiError> {
        from_json(&response.body)
    }

    pub fn parse_update_product(&self, response: HttpResponse) -> Result<Product, ApiError> {
        from_json(&response.body)
    }

    /// Always succeeds: neither the status nor the body is inspected.
    pub fn parse_delete_product(&self, _response: HttpResponse) -> Result<(), ApiError> {
        Ok(())
    }

    fn collection_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    /// The id becomes a single percent-encoded path segment.
    fn item_url(&self, id: &ProductId) -> Result<String, ApiError> {
        let mut url =
            Url::parse(&self.collection_url()).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(format!("{} cannot be a base", self.base_url)))?
            .push(&id.to_string());
        Ok(url.into())
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}
