//! Blocking API client for the product catalog service.
//!
//! # Overview
//! Five operations (list, create, get, update, delete), each one HTTP
//! request against a base endpoint. Request building and response parsing
//! are pure (`ProductClient`); a `Transport` performs the round-trip and
//! `ProductService` ties the two together.
//!
//! # Design
//! - `ProductClient` is stateless: it holds only `base_url`.
//! - Status codes are never checked: every response body is decoded as the
//!   expected type, and delete resolves whatever comes back. Server errors
//!   only surface when their body fails to decode.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod service;
pub mod transport;
pub mod types;

pub use client::ProductClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::ProductService;
pub use transport::{Transport, UreqTransport};
pub use types::{CreateProduct, Product, ProductId, UpdateProduct};
