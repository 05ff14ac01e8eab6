use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

#[derive(Deserialize)]
pub struct ProductInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub category_id: Option<String>,
}

pub type Db = Arc<RwLock<HashMap<String, Product>>>;

/// JSON error envelope: `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
}

impl ApiError {
    fn bad_request(message: &'static str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message,
        }
    }

    fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "product not found",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/health", get(health))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}

async fn list_products(State(db): State<Db>) -> Json<Vec<Product>> {
    let products = db.read().await;
    Json(products.values().cloned().collect())
}

async fn create_product(
    State(db): State<Db>,
    Json(input): Json<ProductInput>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    if input.name.is_empty() {
        return Err(ApiError::bad_request("product name is required"));
    }
    if input.price <= 0.0 {
        return Err(ApiError::bad_request("product price must be positive"));
    }
    let product = Product {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        description: input.description,
        price: input.price,
        category_id: input.category_id,
    };
    db.write().await.insert(product.id.clone(), product.clone());
    info!(id = %product.id, name = %product.name, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

async fn get_product(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let products = db.read().await;
    products.get(&id).cloned().map(Json).ok_or_else(ApiError::not_found)
}

async fn update_product(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<ProductInput>,
) -> Result<Json<Product>, ApiError> {
    if input.name.is_empty() || input.price < 0.0 {
        return Err(ApiError::bad_request(
            "product name is required and price must be non-negative",
        ));
    }
    let mut products = db.write().await;
    let product = products.get_mut(&id).ok_or_else(ApiError::not_found)?;
    *product = Product {
        id: id.clone(),
        name: input.name,
        description: input.description,
        price: input.price,
        category_id: input.category_id,
    };
    info!(%id, "product updated");
    Ok(Json(product.clone()))
}

async fn delete_product(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut products = db.write().await;
    products.remove(&id).ok_or_else(ApiError::not_found)?;
    info!(%id, "product deleted");
    Ok(StatusCode::NO_CONTENT)
}
