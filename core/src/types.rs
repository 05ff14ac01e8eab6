//! Product DTOs exchanged with the catalog server.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.
//!
//! The identifier is opaque: some servers hand out integers, others strings
//! such as UUIDs. `ProductId` keeps whichever JSON shape it was given so an
//! id read from one response can be echoed back unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned product identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{n}"),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ProductId {
    fn from(n: u64) -> Self {
        ProductId::Number(n.into())
    }
}

impl From<i64> for ProductId {
    fn from(n: i64) -> Self {
        ProductId::Number(n.into())
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        ProductId::Text(s.to_string())
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        ProductId::Text(s)
    }
}

/// A catalog product as returned by the server.
///
/// Fields other than the ones below are not kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

/// Request payload for creating a product. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

/// Request payload for updating a product. Every field is sent; the server
/// replaces the stored product wholesale, so a `None` category clears it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

impl From<Product> for UpdateProduct {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            description: product.description,
            price: product.price,
            category_id: product.category_id,
        }
    }
}
